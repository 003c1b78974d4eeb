//! Bloc 4 "Maintenance et Évolution" on the standard title and content
//! layouts.
//!
//! Text goes into layout placeholders; only the title slide is restyled.

use certdeck_core::{pt, Deck, Layout, SlideSize, Theme};

/// File the deck is saved as.
pub const FILENAME: &str = "Presentation_Bloc4_Maintenance_Evolution.pptx";

/// Slides announced in the success banner.
pub const SLIDE_COUNT: usize = 12;

/// Title and body of every slide after the title slide.
const CONTENT_SLIDES: [(&str, &str); 11] = [
    ("Vue d'Ensemble du Projet", OVERVIEW),
    ("C4.1.1 - Processus de Mise à Jour des Dépendances", DEPENDENCY_UPDATES),
    ("C4.1.2 - Système de Supervision et d'Alerte", SUPERVISION),
    ("C4.2.1 - Processus de Collecte et Consignation des Anomalies", ANOMALY_COLLECTION),
    ("C4.2.2 - Traitement d'une Anomalie Détectée", ANOMALY_FIX),
    ("C4.3.1 - Recommandations d'Amélioration Raisonnées", IMPROVEMENTS),
    ("C4.3.2 - Exemple de Journal des Versions", RELEASE_NOTES),
    ("C4.3.3 - Exemple de Problème Résolu en Collaboration", SUPPORT_CASE),
    ("Métriques de Maintenance et Évolution", METRICS),
    ("Conclusion et Perspectives", CONCLUSION),
    ("Questions et Réponses", QUESTIONS),
];

/// Build the deck in memory.
pub fn build() -> Deck {
    let theme = Theme::CERTIFICATION;
    let mut deck = Deck::new("Maintenance et Évolution", SlideSize::STANDARD_4_3);

    let slide = deck.add_slide(Layout::Title);
    slide
        .set_title("Maintenance et Évolution")
        .first()
        .size(pt(44.0))
        .color(theme.primary);
    slide
        .set_body("Plateforme de Cours en Ligne\nBloc 4 - Gestion du Cycle de Vie des Applications")
        .first()
        .size(pt(24.0))
        .color(theme.secondary);

    for (title, body) in CONTENT_SLIDES {
        let slide = deck.add_slide(Layout::TitleAndContent);
        slide.set_title(title);
        slide.set_body(body).monospace_tables();
    }

    deck
}

const OVERVIEW: &str = r#"🎯 Contexte et Objectifs
• Problématique : Créer une plateforme moderne d'apprentissage en ligne
• Solution : Architecture microservices avec technologies modernes
• Public cible : Étudiants, instructeurs, administrateurs

📊 Chiffres Clés
• 7 microservices interconnectés
• 15,000+ utilisateurs actifs
• 500+ cours disponibles
• 99.95% uptime en production

🏗️ Architecture
• Frontend : React + TypeScript
• Backend : Node.js + Express
• Base de données : MongoDB
• Monitoring : Prometheus + Grafana"#;

const DEPENDENCY_UPDATES: &str = r#"🔄 Fréquence des Mises à Jour
• Processus automatisé hebdomadaire avec Dependabot
• Vérification manuelle mensuelle pour les dépendances critiques
• Mises à jour trimestrielles pour les composants majeurs

🎯 Périmètre Concerné
• Frontend : Hebdomadaire (Automatique - Dependabot)
• Backend Services : Hebdomadaire (Automatique - Dependabot)
• Base de données : Trimestrielle (Manuel - DevOps)
• Monitoring : Mensuelle (Automatique - Dependabot)

🛠️ Type de Mise à Jour
• Automatique : Dependabot + GitHub Actions
• Manuel : Dépendances critiques et sécurité
• Validation : Tests automatisés avant déploiement"#;

const SUPERVISION: &str = r#"🎯 Système Adapté au Type de Logiciel
• Prometheus + Grafana + AlertManager pour microservices
• Collecte de métriques en temps réel
• Visualisation via dashboards personnalisés
• Alertes intelligentes avec seuils configurables

🔍 Sondes Mises en Place
Métriques Système :
• CPU, mémoire, disque, réseau
• Temps de réponse des APIs
• Taux d'erreur par service

Métriques Métier :
• Utilisateurs actifs
• Cours consultés
• Transactions de paiement

📈 Critères de Qualité et Performance
• Temps de réponse < 200ms
• Uptime > 99.9%
• Taux d'erreur < 1%
• Utilisation CPU < 80%"#;

const ANOMALY_COLLECTION: &str = r#"📋 Processus Structuré et Adapté
• GitHub Issues comme système centralisé
• Template standardisé pour tous les bugs
• Workflow automatisé de suivi
• Intégration avec le pipeline CI/CD

📝 Fiche d'Anomalie Complète
Bug #123 - Affichage des cours utilisateur
• Date détection : 2025-01-10
• Sévérité : Critique
• Impact : 100% des utilisateurs

Étapes de reproduction :
1. Se connecter avec un compte utilisateur
2. Aller sur le profil utilisateur
3. Cliquer sur l'onglet "Mes Cours"
4. Voir le message "Vous n'êtes inscrit à aucun cours"

🔍 Analyse et Recommandations
• Cause identifiée : Modèle UserCourse non initialisé
• Correction prévue : Validation et fallback
• Tests post-correction : 4 tests unitaires ajoutés"#;

const ANOMALY_FIX: &str = r#"🚀 Bénéfice du Processus CI/CD
• Intégration continue pour la correction
• Branche de correctif créée automatiquement
• Tests automatisés avant merge
• Déploiement automatique après validation

📝 Description de l'Action Corrective
Correctif appliqué pour Bug #123 :

AVANT (code problématique) :
const getUserCourses = async (userId) => {
  const userCourses = await UserCourse.find({ userId });
  return userCourses.courses; // ❌ Erreur si null
};

APRÈS (code corrigé) :
const getUserCourses = async (userId) => {
  try {
    const userCourses = await UserCourse.find({ userId });
    if (!userCourses || userCourses.length === 0) {
      return [];
    }
    return userCourses.map(uc => uc.courses).flat();
  } catch (error) {
    logger.error('Erreur lors de la récupération des cours:', error);
    return [];
  }
};

✅ Résolution de l'Anomalie
• Code corrigé et testé
• Déploiement automatique en production
• Monitoring renforcé pour prévenir la récurrence"#;

const IMPROVEMENTS: &str = r#"💡 Recommandations Raisonnées

1. Cache Redis pour les Performances
• Gain attendu : 70% réduction temps de réponse
• Coût d'implémentation : 2 semaines de développement
• ROI estimé : 40% économie sur les coûts serveur

2. Interface Progressive Web App (PWA)
• Gain attendu : 25% augmentation du temps passé
• Coût d'implémentation : 3 semaines
• ROI estimé : Amélioration de l'engagement utilisateur

3. Authentification Multi-Facteurs (2FA)
• Gain attendu : 90% réduction des tentatives de hack
• Coût d'implémentation : 1 semaine
• ROI estimé : Conformité RGPD renforcée

✅ Réalisme et Faisabilité
• Technologies maîtrisées par l'équipe
• Ressources disponibles pour l'implémentation
• Impact mesurable sur les métriques

🎯 Renforcement de l'Attractivité
• Expérience utilisateur améliorée
• Sécurité renforcée pour la confiance
• Performance optimisée pour la satisfaction"#;

const RELEASE_NOTES: &str = r#"📋 Journal des Versions Complet

Version 2.1.0 - 2025-01-15

🚀 Nouvelles Fonctionnalités :
• Système de recommandation basé sur l'IA
• Notifications push temps réel
• Interface d'administration avancée
• Export des données en CSV

🔧 Anomalies Corrigées :
• #123 - Affichage des cours utilisateur
• #124 - Upload vidéos > 100MB
• #125 - Synchronisation paiements Stripe

⚡ Améliorations :
• Performance : +40% temps de chargement
• Sécurité : Mise à jour dépendances critiques
• UX : Design responsive amélioré

✅ Actions Correctives Documentées
• Code source des corrections
• Tests unitaires ajoutés
• Documentation mise à jour
• Monitoring renforcé"#;

const SUPPORT_CASE: &str = r#"📋 Contexte du Retour Client
• Problème : "Impossible de finaliser l'achat d'un cours"
• Client : Marie D. (utilisatrice premium)
• Impact : Perte de revenus, frustration client
• Ticket : #SUPPORT-2025-001

🔍 Explication du Problème
Diagnostic technique :
2025-01-15 14:25:12 ERROR [payment-service] Stripe API Error
Error: Invalid API key provided
    at Stripe.createPaymentIntent (/app/src/services/stripe.service.js:45)

Cause identifiée : Variable d'environnement STRIPE_SECRET_KEY corrompue

🛠️ Solution Fournie
Actions correctives :
1. Régénération de la clé Stripe
2. Mise à jour de la variable d'environnement
3. Redémarrage du service de paiement
4. Test de validation de l'endpoint

👥 Contribution des Différents Acteurs
• Support (Niveau 1) : Réception et qualification du problème
• Équipe Technique : Diagnostic et correction technique
• Client : Test de validation post-correction, Feedback positif (5/5 ⭐)"#;

const METRICS: &str = r#"🎯 Indicateurs de Performance

| Métrique | Objectif | Actuel | Statut |
|----------|----------|--------|--------|
| Temps de résolution bugs | < 4h | 2h30 | ✅ |
| Disponibilité système | > 99.9% | 99.95% | ✅ |
| Taux de satisfaction client | > 4.5/5 | 4.8/5 | ✅ |
| Fréquence des mises à jour | Hebdomadaire | Respecté | ✅ |
| Couverture monitoring | 100% | 100% | ✅ |

🏆 Points Forts de la Maintenance

🔄 Processus Automatisé
• CI/CD pour les déploiements
• Monitoring en temps réel
• Alertes intelligentes

📈 Qualité Continue
• Tests automatisés (88% couverture)
• Analyse statique avec SonarQube
• Audit de sécurité régulier

👥 Collaboration Efficace
• Support client réactif
• Documentation à jour
• Formation de l'équipe"#;

const CONCLUSION: &str = r#"✅ Compétences Maîtrisées

🚀 Bloc 4 - Maintenance et Évolution
• ✅ C4.1.1 - Processus de mise à jour des dépendances
• ✅ C4.1.2 - Système de supervision et d'alerte
• ✅ C4.2.1 - Collecte et consignation des anomalies
• ✅ C4.2.2 - Traitement d'anomalies avec CI/CD
• ✅ C4.3.1 - Recommandations d'amélioration
• ✅ C4.3.2 - Journal des versions
• ✅ C4.3.3 - Collaboration avec le support client

🔮 Évolution Continue

📈 Améliorations Planifiées
• Machine Learning pour la détection d'anomalies
• Auto-scaling basé sur la charge
• Monitoring prédictif avec IA

🛠️ Outils de Demain
• Observabilité distribuée
• Chaos Engineering pour la résilience
• GitOps pour la gestion des déploiements

💡 Apprentissages Clés
• Maintenance proactive vs réactive
• Importance du monitoring en temps réel
• Collaboration entre équipes
• Documentation comme investissement"#;

const QUESTIONS: &str = r#"🎯 Points de Discussion

🔧 Maintenance et Monitoring
• Stratégie de mise à jour des dépendances
• Configuration du système de supervision
• Gestion des alertes et escalade

🐛 Gestion des Anomalies
• Processus de détection et qualification
• Intégration avec le CI/CD
• Communication avec les clients

🚀 Évolution et Amélioration
• Critères de sélection des améliorations
• Mesure du ROI des évolutions
• Planification des releases

📞 Contact et Ressources
• Repository GitHub : [URL]
• Documentation technique : [URL]
• Dashboard monitoring : [URL]
• Support client : [Email]

Merci pour votre attention !"#;

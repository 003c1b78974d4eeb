//! Bloc 4 "Maintenance et Évolution" in the styled widescreen layout.

use crate::shared::PROJECT_CONTEXT;
use certdeck_core::layout::{self, TitleSlide};
use certdeck_core::{pt, Bounds, Deck, SlideSize, Theme};

/// File the deck is saved as.
pub const FILENAME: &str = "Presentation_Bloc4_Enhanced.pptx";

/// Slides announced in the success banner.
pub const SLIDE_COUNT: usize = 12;

/// Build the deck in memory.
pub fn build() -> Deck {
    let theme = Theme::CERTIFICATION;
    let mut deck = Deck::new("Maintenance et Évolution", SlideSize::WIDESCREEN_16_9);

    TitleSlide {
        title: "Maintenance et Évolution",
        subtitle: "Plateforme de Cours en Ligne\nBloc 4 - Gestion du Cycle de Vie des Applications",
    }
    .add_to(&mut deck, &theme);
    overview(&mut deck, &theme);
    dependency_updates(&mut deck, &theme);
    supervision(&mut deck, &theme);
    anomaly_collection(&mut deck, &theme);
    anomaly_fix(&mut deck, &theme);
    improvements(&mut deck, &theme);
    release_notes(&mut deck, &theme);
    support_case(&mut deck, &theme);
    metrics(&mut deck, &theme);
    conclusion(&mut deck, &theme);
    questions(&mut deck, &theme);

    deck
}

fn overview(deck: &mut Deck, theme: &Theme) {
    let slide = layout::titled(deck, theme, "Vue d'Ensemble du Projet", 36.0);
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 5.0), PROJECT_CONTEXT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 5.0), OVERVIEW_RIGHT);
    layout::accent_bar(slide, 0.5, 1.8, 6.0, theme.secondary);
    layout::accent_bar(slide, 7.0, 1.8, 6.0, theme.accent);
}

const OVERVIEW_RIGHT: &str = r#"🏗️ Architecture Technique

Frontend :
• React + TypeScript
• Material-UI
• Responsive Design

Backend :
• Node.js + Express
• MongoDB + Mongoose
• JWT Authentication

Monitoring :
• Prometheus + Grafana
• AlertManager
• Health Checks

DevOps :
• Docker + Docker Compose
• GitHub Actions CI/CD
• SonarQube Quality"#;

fn dependency_updates(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.1.1 - Processus de Mise à Jour des Dépendances",
        28.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 2.5), DEPENDENCY_UPDATES_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 4.5), DEPENDENCY_UPDATES_RIGHT);
}

const DEPENDENCY_UPDATES_LEFT: &str = r#"🔄 Fréquence des Mises à Jour

• Processus automatisé hebdomadaire avec Dependabot
• Vérification manuelle mensuelle pour les dépendances critiques
• Mises à jour trimestrielles pour les composants majeurs

🛠️ Type de Mise à Jour

• Automatique : Dependabot + GitHub Actions
• Manuel : Dépendances critiques et sécurité
• Validation : Tests automatisés avant déploiement"#;

const DEPENDENCY_UPDATES_RIGHT: &str = r#"🎯 Périmètre Concerné

┌─────────────────┬─────────────┬─────────────┬─────────────┐
│   Composant     │  Fréquence  │    Type     │ Responsable │
├─────────────────┼─────────────┼─────────────┼─────────────┤
│   Frontend      │ Hebdomadaire│ Automatique │ Dependabot  │
│ Backend Services│ Hebdomadaire│ Automatique │ Dependabot  │
│ Base de données │Trimestrielle│   Manuel    │   DevOps    │
│   Monitoring    │  Mensuelle  │ Automatique │ Dependabot  │
└─────────────────┴─────────────┴─────────────┴─────────────┘"#;

fn supervision(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.1.2 - Système de Supervision et d'Alerte",
        28.0,
        theme.accent,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 4.0, 4.5), SUPERVISION_LEFT);
    layout::column(slide, Bounds::inches(5.0, 2.0, 4.0, 4.5), SUPERVISION_MIDDLE);
    layout::column(slide, Bounds::inches(9.5, 2.0, 3.33, 4.5), SUPERVISION_RIGHT);
}

const SUPERVISION_LEFT: &str = r#"🎯 Système Adapté

Prometheus + Grafana + AlertManager
pour microservices

• Collecte de métriques en temps réel
• Visualisation via dashboards personnalisés
• Alertes intelligentes avec seuils configurables
• Health checks toutes les 30 secondes"#;

const SUPERVISION_MIDDLE: &str = r#"🔍 Sondes Mises en Place

Métriques Système :
• CPU, mémoire, disque, réseau
• Temps de réponse des APIs
• Taux d'erreur par service

Métriques Métier :
• Utilisateurs actifs
• Cours consultés
• Transactions de paiement"#;

const SUPERVISION_RIGHT: &str = r#"📈 Critères de Qualité

• Temps de réponse < 200ms
• Uptime > 99.9%
• Taux d'erreur < 1%
• Utilisation CPU < 80%

✅ Surveillance Disponibilité

• Alertes automatiques en cas de panne
• Escalade vers l'équipe technique
• Monitoring 24/7"#;

fn anomaly_collection(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.2.1 - Processus de Collecte et Consignation des Anomalies",
        24.0,
        theme.warning,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 2.0), ANOMALY_COLLECTION_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 4.5), ANOMALY_COLLECTION_RIGHT);
}

const ANOMALY_COLLECTION_LEFT: &str = r#"📋 Processus Structuré et Adapté

• GitHub Issues comme système centralisé
• Template standardisé pour tous les bugs
• Workflow automatisé de suivi
• Intégration avec le pipeline CI/CD"#;

const ANOMALY_COLLECTION_RIGHT: &str = r#"🐛 Fiche d'Anomalie Complète

Bug #123 - Affichage des cours utilisateur

📅 Date détection : 2025-01-10
🚨 Sévérité : Critique
👥 Impact : 100% des utilisateurs

📝 Étapes de reproduction :
1. Se connecter avec un compte utilisateur
2. Aller sur le profil utilisateur
3. Cliquer sur l'onglet "Mes Cours"
4. Voir le message "Vous n'êtes inscrit à aucun cours"

🔍 Analyse et Recommandations
• Cause identifiée : Modèle UserCourse non initialisé
• Correction prévue : Validation et fallback
• Tests post-correction : 4 tests unitaires ajoutés"#;

fn anomaly_fix(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.2.2 - Traitement d'une Anomalie Détectée",
        28.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 1.5), ANOMALY_FIX_LEFT);
    layout::column(slide, Bounds::inches(0.5, 4.0, 12.33, 3.0), ANOMALY_FIX_BOTTOM);
}

const ANOMALY_FIX_LEFT: &str = r#"🚀 Bénéfice du Processus CI/CD

• Intégration continue pour la correction
• Branche de correctif créée automatiquement
• Tests automatisés avant merge
• Déploiement automatique après validation"#;

const ANOMALY_FIX_BOTTOM: &str = r#"📝 Description de l'Action Corrective

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

fn improvements(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.3.1 - Recommandations d'Amélioration Raisonnées",
        24.0,
        theme.accent,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 4.0, 4.5), IMPROVEMENTS_LEFT);
    layout::column(slide, Bounds::inches(5.0, 2.0, 4.0, 4.5), IMPROVEMENTS_MIDDLE);
    layout::column(slide, Bounds::inches(9.5, 2.0, 3.33, 4.5), IMPROVEMENTS_RIGHT);
}

const IMPROVEMENTS_LEFT: &str = r#"💾 Cache Redis pour les Performances

Gain attendu : 70% réduction temps de réponse
Coût d'implémentation : 2 semaines
ROI estimé : 40% économie sur les coûts serveur

✅ Réalisme et Faisabilité
• Technologies maîtrisées par l'équipe
• Ressources disponibles
• Impact mesurable"#;

const IMPROVEMENTS_MIDDLE: &str = r#"📱 Interface Progressive Web App (PWA)

Gain attendu : 25% augmentation du temps passé
Coût d'implémentation : 3 semaines
ROI estimé : Amélioration de l'engagement utilisateur

🎯 Renforcement de l'Attractivité
• Expérience utilisateur améliorée
• Sécurité renforcée
• Performance optimisée"#;

const IMPROVEMENTS_RIGHT: &str = r#"🔐 Authentification Multi-Facteurs (2FA)

Gain attendu : 90% réduction des tentatives de hack
Coût d'implémentation : 1 semaine
ROI estimé : Conformité RGPD renforcée

🛡️ Sécurité Renforcée
• Protection contre les attaques
• Conformité réglementaire
• Confiance utilisateur"#;

fn release_notes(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.3.2 - Exemple de Journal des Versions",
        28.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 12.33, 0.8), RELEASE_NOTES_VERSION)
        .first()
        .size(pt(20.0))
        .bold(true)
        .color(theme.accent);
    layout::column(slide, Bounds::inches(0.5, 3.0, 4.0, 3.5), RELEASE_NOTES_LEFT);
    layout::column(slide, Bounds::inches(5.0, 3.0, 4.0, 3.5), RELEASE_NOTES_MIDDLE);
    layout::column(slide, Bounds::inches(9.5, 3.0, 3.33, 3.5), RELEASE_NOTES_RIGHT);
}

const RELEASE_NOTES_VERSION: &str = r#"📋 Version 2.1.0 - 2025-01-15"#;

const RELEASE_NOTES_LEFT: &str = r#"🚀 Nouvelles Fonctionnalités

• Système de recommandation basé sur l'IA
• Notifications push temps réel
• Interface d'administration avancée
• Export des données en CSV"#;

const RELEASE_NOTES_MIDDLE: &str = r#"🔧 Anomalies Corrigées

• #123 - Affichage des cours utilisateur
• #124 - Upload vidéos > 100MB
• #125 - Synchronisation paiements Stripe"#;

const RELEASE_NOTES_RIGHT: &str = r#"⚡ Améliorations

• Performance : +40% temps de chargement
• Sécurité : Mise à jour dépendances critiques
• UX : Design responsive amélioré

✅ Actions Correctives Documentées
• Code source des corrections
• Tests unitaires ajoutés
• Documentation mise à jour
• Monitoring renforcé"#;

fn support_case(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C4.3.3 - Exemple de Problème Résolu en Collaboration",
        24.0,
        theme.warning,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 1.5), SUPPORT_CASE_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 1.5), SUPPORT_CASE_RIGHT);
    layout::column(slide, Bounds::inches(0.5, 4.0, 12.33, 2.5), SUPPORT_CASE_BOTTOM);
}

const SUPPORT_CASE_LEFT: &str = r#"📋 Contexte du Retour Client

• Problème : "Impossible de finaliser l'achat d'un cours"
• Client : Marie D. (utilisatrice premium)
• Impact : Perte de revenus, frustration client
• Ticket : #SUPPORT-2025-001"#;

const SUPPORT_CASE_RIGHT: &str = r#"🔍 Diagnostic Technique

2025-01-15 14:25:12 ERROR [payment-service] Stripe API Error
Error: Invalid API key provided
    at Stripe.createPaymentIntent (/app/src/services/stripe.service.js:45)

Cause identifiée : Variable d'environnement STRIPE_SECRET_KEY corrompue"#;

const SUPPORT_CASE_BOTTOM: &str = r#"🛠️ Solution Fournie

Actions correctives :
1. Régénération de la clé Stripe
2. Mise à jour de la variable d'environnement
3. Redémarrage du service de paiement
4. Test de validation de l'endpoint

👥 Contribution des Différents Acteurs

Support (Niveau 1) : Réception et qualification du problème
Équipe Technique : Diagnostic et correction technique
Client : Test de validation post-correction, Feedback positif (5/5 ⭐)"#;

fn metrics(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "Métriques de Maintenance et Évolution",
        32.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 12.33, 2.5), METRICS_TOP);
    layout::column(slide, Bounds::inches(0.5, 5.0, 12.33, 2.0), METRICS_BOTTOM);
}

const METRICS_TOP: &str = r#"🎯 Indicateurs de Performance

┌─────────────────────────┬─────────────┬─────────────┬─────────┐
│        Métrique         │   Objectif  │   Actuel    │  Statut │
├─────────────────────────┼─────────────┼─────────────┼─────────┤
│ Temps de résolution bugs│    < 4h     │   2h30      │   ✅    │
│ Disponibilité système   │   > 99.9%   │   99.95%    │   ✅    │
│ Taux de satisfaction    │   > 4.5/5   │    4.8/5    │   ✅    │
│ Fréquence des mises à jour│ Hebdomadaire│  Respecté   │   ✅    │
│ Couverture monitoring   │    100%     │    100%     │   ✅    │
└─────────────────────────┴─────────────┴─────────────┴─────────┘"#;

const METRICS_BOTTOM: &str = r#"🏆 Points Forts de la Maintenance

🔄 Processus Automatisé : CI/CD pour les déploiements, Monitoring en temps réel, Alertes intelligentes
📈 Qualité Continue : Tests automatisés (88% couverture), Analyse statique avec SonarQube, Audit de sécurité régulier
👥 Collaboration Efficace : Support client réactif, Documentation à jour, Formation de l'équipe"#;

fn conclusion(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "Conclusion et Perspectives",
        32.0,
        theme.accent,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 3.5), CONCLUSION_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 5.83, 3.5), CONCLUSION_RIGHT);
}

const CONCLUSION_LEFT: &str = r#"✅ Compétences Maîtrisées

🚀 Bloc 4 - Maintenance et Évolution
• ✅ C4.1.1 - Processus de mise à jour des dépendances
• ✅ C4.1.2 - Système de supervision et d'alerte
• ✅ C4.2.1 - Collecte et consignation des anomalies
• ✅ C4.2.2 - Traitement d'anomalies avec CI/CD
• ✅ C4.3.1 - Recommandations d'amélioration
• ✅ C4.3.2 - Journal des versions
• ✅ C4.3.3 - Collaboration avec le support client"#;

const CONCLUSION_RIGHT: &str = r#"🔮 Évolution Continue

📈 Améliorations Planifiées
• Machine Learning pour la détection d'anomalies
• Auto-scaling basé sur la charge
• Monitoring prédictif avec IA

💡 Apprentissages Clés
• Maintenance proactive vs réactive
• Importance du monitoring en temps réel
• Collaboration entre équipes
• Documentation comme investissement"#;

fn questions(deck: &mut Deck, theme: &Theme) {
    let size = deck.slide_size;
    let slide = layout::section(
        deck,
        theme,
        "Questions et Réponses",
        32.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 3.5), QUESTIONS_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 5.83, 3.5), QUESTIONS_RIGHT);
    layout::closing_circles(slide, size, theme);
}

const QUESTIONS_LEFT: &str = r#"🎯 Points de Discussion

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
• Planification des releases"#;

const QUESTIONS_RIGHT: &str = r#"📞 Contact et Ressources

• Repository GitHub : [URL]
• Documentation technique : [URL]
• Dashboard monitoring : [URL]
• Support client : [Email]

🎉 Merci pour votre attention !

Prêt pour les questions !"#;

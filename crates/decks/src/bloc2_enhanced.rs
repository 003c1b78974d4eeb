//! Bloc 2 "Développement et Déploiement" in the styled widescreen layout.

use crate::shared::PROJECT_CONTEXT;
use certdeck_core::layout::{self, TitleSlide};
use certdeck_core::{Bounds, Deck, SlideSize, Theme};

/// File the deck is saved as.
pub const FILENAME: &str = "Presentation_Bloc2_Enhanced.pptx";

/// Slides announced in the success banner.
pub const SLIDE_COUNT: usize = 13;

/// Build the deck in memory.
pub fn build() -> Deck {
    let theme = Theme::CERTIFICATION;
    let mut deck = Deck::new("Développement et Déploiement", SlideSize::WIDESCREEN_16_9);

    TitleSlide {
        title: "Développement et Déploiement",
        subtitle: "Plateforme de Cours en Ligne\nBloc 2 - Développement et Déploiement",
    }
    .add_to(&mut deck, &theme);
    overview(&mut deck, &theme);
    deployment_environments(&mut deck, &theme);
    continuous_integration(&mut deck, &theme);
    prototype(&mut deck, &theme);
    unit_tests(&mut deck, &theme);
    security_accessibility(&mut deck, &theme);
    deployment(&mut deck, &theme);
    acceptance_tests(&mut deck, &theme);
    bug_fixes(&mut deck, &theme);
    documentation(&mut deck, &theme);
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

DevOps :
• Docker + Docker Compose
• GitHub Actions CI/CD
• SonarQube Quality

Tests :
• Jest + React Testing Library
• Supertest pour les APIs
• Cypress pour E2E"#;

fn deployment_environments(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.1.1 - Environnements de Déploiement et Test",
        24.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 2.5), DEPLOYMENT_ENVIRONMENTS_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 4.5), DEPLOYMENT_ENVIRONMENTS_RIGHT);
}

const DEPLOYMENT_ENVIRONMENTS_LEFT: &str = r#"🔄 Protocole de Déploiement Continu (CI/CD)

Pipeline CI/CD complet avec GitHub Actions :

• Build automatique sur chaque commit
• Tests unitaires et d'intégration
• Analyse de qualité avec SonarQube
• Déploiement automatique staging/prod
• Monitoring et alertes en temps réel

🛠️ Environnement de Développement

• Éditeur : Visual Studio Code
• Versioning : Git avec GitFlow
• Containerisation : Docker + Docker Compose
• Base de données : MongoDB local"#;

const DEPLOYMENT_ENVIRONMENTS_RIGHT: &str = r#"📊 Outils de Qualité et Performance

Linting et Formatage :
• ESLint + Prettier
• TypeScript strict mode
• Husky pre-commit hooks

Tests :
• Jest pour tests unitaires
• React Testing Library
• Cypress pour E2E
• Supertest pour APIs

Monitoring :
• Prometheus + Grafana
• Health checks automatiques
• Métriques de performance

Qualité Code :
• SonarQube analysis
• Code coverage > 80%
• Security audit automatique"#;

fn continuous_integration(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.1.2 - Configuration du Système d'Intégration Continue",
        24.0,
        theme.accent,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 12.33, 2.0), CONTINUOUS_INTEGRATION_TOP);
    layout::column(slide, Bounds::inches(0.5, 4.5, 12.33, 2.5), CONTINUOUS_INTEGRATION_BOTTOM);
}

const CONTINUOUS_INTEGRATION_TOP: &str = r#"🚀 Pipeline d'Intégration Continue - GitHub Actions

1. BUILD : Compilation et construction des images Docker
2. TEST : Exécution des tests unitaires et d'intégration
3. LINT : Analyse statique du code avec ESLint
4. QUALITY : Analyse SonarQube et audit de sécurité
5. DEPLOY : Déploiement automatique staging/production"#;

const CONTINUOUS_INTEGRATION_BOTTOM: &str = r#"📈 Métriques de Qualité

┌─────────────────────┬─────────────┬─────────────┬─────────┐
│      Métrique       │   Objectif  │   Actuel    │  Statut │
├─────────────────────┼─────────────┼─────────────┼─────────┤
│ Couverture Tests    │    > 80%    │    88%      │   ✅    │
│ Performance API     │   < 200ms   │   150ms     │   ✅    │
│ Sécurité           │  0 vulnérabilité critique │   ✅    │
│ Accessibilité      │ WCAG 2.1 AA │   Conforme   │   ✅    │
│ Uptime             │   > 99.9%   │   99.95%    │   ✅    │
└─────────────────────┴─────────────┴─────────────┴─────────┘"#;

fn prototype(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.2.1 - Prototype d'Application Logicielle",
        28.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 2.5), PROTOTYPE_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 4.5), PROTOTYPE_RIGHT);
}

const PROTOTYPE_LEFT: &str = r#"🏛️ Architecture Logicielle Structurée

Architecture Microservices avec Pattern CQRS :

┌─────────────────────────────────────────────┐
│                API Gateway                  │
│              (Load Balancer)                │
└─────────────────┬───────────────────────────┘
                  │
    ┌─────────────┼─────────────┐
    │             │             │
┌───▼───┐   ┌────▼────┐   ┌────▼────┐
│ Auth  │   │ Content │   │ Payment │
│Service│   │ Service │   │ Service │
└───────┘   └─────────┘   └─────────┘
    │             │             │
    └─────────────┼─────────────┘
                  │
            ┌─────▼─────┐
            │  MongoDB  │
            │  Cluster  │
            └───────────┘"#;

const PROTOTYPE_RIGHT: &str = r#"🎯 Frameworks et Paradigmes

┌─────────────┬─────────────┬─────────────────────────┐
│    Couche   │  Framework  │      Paradigme          │
├─────────────┼─────────────┼─────────────────────────┤
│  Frontend   │ React 18 +  │ Composant fonctionnel   │
│             │ TypeScript  │ Performance, évolutivité │
├─────────────┼─────────────┼─────────────────────────┤
│   Backend   │ Node.js +   │ Modulaire               │
│             │ Express     │ Rapidité de développement│
├─────────────┼─────────────┼─────────────────────────┤
│ Base de     │ MongoDB +   │ Document                │
│ données     │ Mongoose    │ Flexibilité des schémas │
├─────────────┼─────────────┼─────────────────────────┤
│ Authentif.  │ Passport.js │ Stratégie               │
│             │ + JWT       │ Sécurité et extensibilité│
├─────────────┼─────────────┼─────────────────────────┤
│   Tests     │ Jest + RTL  │ TDD                     │
│             │             │ Couverture complète     │
└─────────────┴─────────────┴─────────────────────────┘"#;

fn unit_tests(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.2.2 - Harnais de Test Unitaire",
        32.0,
        theme.accent,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 12.33, 3.0), UNIT_TESTS_TOP);
    layout::column(slide, Bounds::inches(0.5, 5.5, 12.33, 1.5), UNIT_TESTS_BOTTOM);
}

const UNIT_TESTS_TOP: &str = r#"🧪 Jeu de Tests Unitaires Complet

Exemple de test d'authentification :

```javascript
describe('Authentication API', () => {
  describe('POST /api/auth/register', () => {
    it('should register a new user with valid data', async () => {
      const userData = {
        email: 'test@example.com',
        password: 'Password123!',
        firstName: 'John',
        lastName: 'Doe'
      };

      const response = await request(app)
        .post('/api/auth/register')
        .send(userData)
        .expect(201);

      expect(response.body).toHaveProperty('token');
      expect(response.body.user.email).toBe(userData.email);
    });

    it('should reject registration with invalid email', async () => {
      const userData = {
        email: 'invalid-email',
        password: 'Password123!'
      };

      await request(app)
        .post('/api/auth/register')
        .send(userData)
        .expect(400);
    });
  });
});
```"#;

const UNIT_TESTS_BOTTOM: &str = r#"📊 Couverture de Tests

┌─────────────────┬─────────────┬─────────────┬─────────┐
│     Service     │ Couverture  │   Objectif  │  Statut │
├─────────────────┼─────────────┼─────────────┼─────────┤
│  Auth Service   │    92%      │    > 80%    │   ✅    │
│ Content Service │    88%      │    > 80%    │   ✅    │
│   Frontend      │    85%      │    > 80%    │   ✅    │
│ Payment Service │    90%      │    > 80%    │   ✅    │
└─────────────────┴─────────────┴─────────────┴─────────┘"#;

fn security_accessibility(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.2.3 - Sécurité, Accessibilité et Évolutivité",
        24.0,
        theme.warning,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 2.5), SECURITY_ACCESSIBILITY_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 2.5), SECURITY_ACCESSIBILITY_RIGHT);
}

const SECURITY_ACCESSIBILITY_LEFT: &str = r#"🛡️ Mesures de Sécurité (OWASP Top 10)

1. Injection (A01:2021)
• Validation Joi pour toutes les entrées
• Paramètres préparés pour requêtes DB

2. Authentification (A02:2021)
• JWT avec expiration courte
• Mots de passe hashés avec bcrypt (12 rounds)
• Rate limiting sur les endpoints sensibles

3. Protection XSS/CSRF
• DOMPurify pour sanitisation
• CSRF tokens sur formulaires
• Headers de sécurité (Helmet)"#;

const SECURITY_ACCESSIBILITY_RIGHT: &str = r#"♿ Accessibilité (WCAG 2.1 AA)

• Navigation au clavier complète
• Attributs ARIA appropriés
• Contraste de couleurs conforme
• Textes alternatifs pour images
• Structure sémantique HTML
• Tests automatisés avec axe-core

🎯 Évolutivité
• Architecture microservices
• API versioning
• Base de données scalable
• Cache Redis pour performance
• Load balancing automatique"#;

fn deployment(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.2.4 - Déploiement du Logiciel",
        32.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 2.0), DEPLOYMENT_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 4.5), DEPLOYMENT_RIGHT);
}

const DEPLOYMENT_LEFT: &str = r#"📊 Historique des Versions

```bash
# git log --oneline --graph
* a1b2c3d (HEAD -> main) feat: Ajouter système de recommandation ML
* d4e5f6g feat: Implémenter notifications push
* h7i8j9k fix: Corriger bug affichage cours utilisateur
* l1m2n3o feat: Ajouter authentification 2FA
* p4q5r6s feat: Migration vers microservices
* t7u8v9w feat: Version initiale MVP
```

✅ Version Stable Actuelle : v2.1.0
• Fonctionnelle et utilisable
• Tests automatisés passants
• Documentation complète"#;

const DEPLOYMENT_RIGHT: &str = r#"🧪 Tests Utilisateurs

Feedback utilisateurs v2.1.0 :
• Participants : 50 utilisateurs
• Satisfaction : 4.8/5
• Facilité d'utilisation : 4.6/5
• Performance : 4.7/5
• Accessibilité : 4.5/5

Commentaires positifs :
• "Interface très intuitive"
• "Navigation fluide"
• "Vidéos se chargent rapidement"
• "Bonne qualité générale"

Tests de charge :
• 1000 utilisateurs simultanés
• Temps de réponse < 200ms
• Uptime > 99.9%"#;

fn acceptance_tests(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.3.1 - Cahier de Recettes",
        32.0,
        theme.accent,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 6.0, 4.5), ACCEPTANCE_TESTS_LEFT);
    layout::column(slide, Bounds::inches(7.0, 2.0, 6.0, 4.5), ACCEPTANCE_TESTS_RIGHT);
}

const ACCEPTANCE_TESTS_LEFT: &str = r#"🧪 Tests Fonctionnels

1. Authentification Utilisateur
   Scénario 1.1 : Inscription Nouvel Utilisateur
   • Prérequis : Aucun compte existant
   • Étapes : Aller sur /register, remplir formulaire
   • Résultat attendu : Compte créé, redirection dashboard
   • Statut : ✅ Passé

   Scénario 1.2 : Connexion Utilisateur
   • Prérequis : Compte utilisateur existant
   • Étapes : Aller sur /login, saisir credentials
   • Résultat attendu : Connexion réussie
   • Statut : ✅ Passé

2. Gestion des Cours
   Scénario 2.1 : Consultation Catalogue
   • Prérequis : Utilisateur connecté
   • Étapes : Aller sur /courses, utiliser filtres
   • Résultat attendu : Affichage correct des cours
   • Statut : ✅ Passé"#;

const ACCEPTANCE_TESTS_RIGHT: &str = r#"🔧 Tests Techniques

Tests de Performance :
• API response time < 200ms ✅
• Database connection stable ✅
• Load testing 1000 users ✅

Tests de Sécurité :
• Injection SQL protection ✅
• XSS prevention ✅
• CSRF protection ✅
• Authentication bypass ✅

Tests d'Accessibilité :
• Navigation clavier ✅
• Screen reader compatibility ✅
• Color contrast compliance ✅
• ARIA attributes ✅

Tests Structurels :
• Code coverage > 80% ✅
• SonarQube quality gate ✅
• Security audit passed ✅"#;

fn bug_fixes(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.3.2 - Plan de Correction des Bogues",
        28.0,
        theme.warning,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 12.33, 3.0), BUG_FIXES_BODY);
}

const BUG_FIXES_BODY: &str = r#"🐛 Registre des Anomalies - Version 2.1.0

Bug #123 - Affichage des cours utilisateur
• Date détection : 2025-01-10
• Sévérité : Critique
• Description : Les cours ne s'affichent pas dans l'onglet "Mes Cours"

Analyse :
• Cause : Modèle UserCourse non initialisé correctement
• Impact : Utilisateurs ne peuvent pas accéder à leurs cours
• Fréquence : 100% des utilisateurs

Correction Prévue :
1. Vérifier l'initialisation du modèle UserCourse
2. Ajouter validation des données utilisateur
3. Implémenter fallback pour données manquantes
4. Ajouter tests unitaires

Correctif Appliqué :
```javascript
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
```

Tests Post-Correction :
• ✅ Test unitaire : Utilisateur sans cours
• ✅ Test unitaire : Utilisateur avec cours
• ✅ Test d'intégration : API /api/users/me/courses
• ✅ Test utilisateur : Interface frontend

Statut : ✅ Résolu (2025-01-12)"#;

fn documentation(deck: &mut Deck, theme: &Theme) {
    let slide = layout::section(
        deck,
        theme,
        "C2.4.1 - Documentation Technique",
        32.0,
        theme.secondary,
    );
    layout::column(slide, Bounds::inches(0.5, 2.0, 4.0, 4.5), DOCUMENTATION_LEFT);
    layout::column(slide, Bounds::inches(5.0, 2.0, 4.0, 4.5), DOCUMENTATION_MIDDLE);
    layout::column(slide, Bounds::inches(9.5, 2.0, 3.33, 4.5), DOCUMENTATION_RIGHT);
}

const DOCUMENTATION_LEFT: &str = r#"📖 Manuel de Déploiement

Prérequis Système :
• Node.js 18+
• Docker 20+
• MongoDB 5+
• 4GB RAM minimum

Installation :
1. Cloner le repository
2. Configuration environnement (.env)
3. Déploiement Docker
4. Vérification services

Configuration Production :
• Secrets pour variables sensibles
• Reverse proxy Nginx
• Certificat SSL
• Sauvegardes automatiques"#;

const DOCUMENTATION_MIDDLE: &str = r#"👥 Manuel d'Utilisation

Première Connexion :
1. Créer un compte
2. Valider email
3. Parcourir les cours
4. S'inscrire à un cours

Fonctionnalités Avancées :
• Télécharger les ressources
• Participer aux forums
• Suivre la progression
• Obtenir des certificats"#;

const DOCUMENTATION_RIGHT: &str = r#"🔄 Manuel de Mise à Jour

Processus de Mise à Jour :
1. Sauvegarder les données
2. Arrêter les services
3. Récupérer modifications
4. Reconstruire images
5. Redémarrer services
6. Vérifier santé

Rollback en Cas de Problème :
• Revenir version précédente
• Restaurer sauvegarde
• Redémarrer services

Automatisation :
• GitHub Actions CI/CD
• Déploiement automatique
• Tests avant déploiement"#;

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

🚀 Bloc 2 - Développement et Déploiement
• ✅ C2.1.1 - Environnements de déploiement et test
• ✅ C2.1.2 - Configuration système d'intégration continue
• ✅ C2.2.1 - Prototype d'application logicielle
• ✅ C2.2.2 - Harnais de test unitaire
• ✅ C2.2.3 - Sécurité, accessibilité, évolutivité
• ✅ C2.2.4 - Déploiement du logiciel
• ✅ C2.3.1 - Cahier de recettes
• ✅ C2.3.2 - Plan de correction des bogues
• ✅ C2.4.1 - Documentation technique"#;

const CONCLUSION_RIGHT: &str = r#"🔮 Évolution Continue

📈 Améliorations Planifiées
• Machine Learning pour recommandations
• Microservices supplémentaires
• Monitoring prédictif
• Auto-scaling intelligent

💡 Apprentissages Clés
• Importance des tests automatisés
• CI/CD comme standard
• Sécurité dès la conception
• Documentation comme investissement
• Architecture évolutive

🎯 Prochaines Étapes
• Déploiement multi-cloud
• Observabilité distribuée
• Chaos Engineering
• GitOps workflow"#;

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

🏗️ Architecture et Développement
• Choix de l'architecture microservices
• Stratégie de tests (unitaires, intégration, E2E)
• Gestion des dépendances et sécurité

🔄 CI/CD et Déploiement
• Pipeline d'intégration continue
• Stratégie de déploiement
• Monitoring et observabilité

🔒 Sécurité et Qualité
• Mesures de sécurité implémentées
• Tests d'accessibilité
• Audit de qualité du code

📚 Documentation et Maintenance
• Stratégie de documentation
• Gestion des bugs et anomalies
• Évolutivité du système"#;

const QUESTIONS_RIGHT: &str = r#"📞 Contact et Ressources

• Repository GitHub : [URL]
• Documentation technique : [URL]
• Dashboard monitoring : [URL]
• Support technique : [Email]

🎉 Merci pour votre attention !

Prêt pour les questions !

📊 Métriques Finales
• Couverture Tests : 88%
• Performance API : 150ms
• Sécurité : 0 vulnérabilité
• Accessibilité : WCAG 2.1 AA
• Uptime : 99.95%"#;

#[cfg(test)]
mod tests {
    use super::*;
    use certdeck_core::text::MONOSPACE_TYPEFACE;
    use certdeck_core::{Fill, Shape};

    #[test]
    fn test_slide_count_matches_banner() {
        assert_eq!(build().slide_count(), SLIDE_COUNT);
    }

    #[test]
    fn test_titles_in_order() {
        let deck = build();
        let titles: Vec<String> = deck
            .slides
            .iter()
            .map(|s| s.text_frames().next().unwrap().paragraphs[0].text.clone())
            .collect();
        assert_eq!(titles[0], "Développement et Déploiement");
        assert_eq!(titles[8], "C2.3.1 - Cahier de Recettes");
        assert_eq!(titles[12], "Questions et Réponses");
    }

    #[test]
    fn test_git_history_fence_is_monospace() {
        let deck = build();
        let history = deck.slides[7].text_frames().nth(1).unwrap();
        let mono: Vec<bool> = history
            .paragraphs
            .iter()
            .map(|p| p.font.typeface.as_deref() == Some(MONOSPACE_TYPEFACE))
            .collect();
        assert!(!mono[0]);
        assert!(mono[2..=9].iter().all(|m| *m));
        assert!(!mono[11]);
    }

    #[test]
    fn test_bug_plan_uses_warning_rule() {
        let deck = build();
        match &deck.slides[9].shapes[1] {
            Shape::Auto(rule) => {
                assert_eq!(rule.fill, Fill::Solid(Theme::CERTIFICATION.warning))
            }
            other => panic!("expected rule, got {:?}", other),
        }
    }

    #[test]
    fn test_overview_shares_project_context() {
        let deck = build();
        let context = deck.slides[1].text_frames().nth(1).unwrap();
        assert_eq!(context.text(), PROJECT_CONTEXT);
    }
}

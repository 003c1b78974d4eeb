//! Content common to several decks.

/// Project context column of the overview slides.
pub const PROJECT_CONTEXT: &str = r#"🎯 Contexte et Objectifs

• Problématique : Créer une plateforme moderne d'apprentissage en ligne
• Solution : Architecture microservices avec technologies modernes
• Public cible : Étudiants, instructeurs, administrateurs

📊 Chiffres Clés

• 7 microservices interconnectés
• 15,000+ utilisateurs actifs
• 500+ cours disponibles
• 99.95% uptime en production"#;

//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A mixed catalog: two procedures and two legal texts
pub const MIXED_CATALOG_YAML: &str = r#"
records:
  - id: 1
    title: Création d'entreprise SARL
    description: Procédure complète pour créer une société à responsabilité limitée
    category: Entreprise
    type: commercial
    status: active
    digitization: "yes"
    duration: 15-30 jours
    complexity: Moyenne
    institution: Ministère du Commerce
    popularity: 95
  - id: 2
    title: Permis de construire
    description: Demande d'autorisation de construction pour bâtiment résidentiel
    category: Urbanisme
    type: urbanisme
    status: active
    digitization: "partially"
    popularity: 87
  - id: 101
    kind: legal_text
    title: Code de commerce
    description: Règles applicables aux commerçants et aux sociétés commerciales
    category: Commerce
    type: code
    status: En vigueur
    digitization: "yes"
    publishDate: 2024-01-15
    authority: Présidence de la République
    joNumber: JO n° 101
  - id: 102
    kind: legal_text
    title: Décret relatif aux permis de construire
    description: Modalités d'instruction des demandes de permis
    category: Urbanisme
    type: decret
    status: Abrogé
    digitization: "no"
    publishDate: 10 janvier 2024
"#;

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}

//! End-to-end browsing session: load, filter, sort, open, act

mod common;

use dalil_core::catalog::{Catalog, CatalogError, RecordKind};
use dalil_core::detail::{ActionPayload, DetailBody, DetailConfig, DetailSynthesizer};
use dalil_core::filter::{Facet, FilterEngine, FilterUpdate, SortField, SortSpec};
use dalil_core::DalilConfig;
use tempfile::TempDir;

use common::{init_test_logging, write_file, MIXED_CATALOG_YAML};

fn visible_ids(engine: &FilterEngine) -> Vec<u64> {
    engine.visible_records().iter().map(|r| r.id).collect()
}

#[test]
fn test_load_yaml_catalog_from_disk() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "catalog.yaml", MIXED_CATALOG_YAML);

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get(101).unwrap().kind, RecordKind::LegalText);
}

#[test]
fn test_load_json_catalog_by_extension() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let yaml_catalog = Catalog::from_yaml(MIXED_CATALOG_YAML).unwrap();
    let json = serde_json::json!({ "records": yaml_catalog.records() }).to_string();
    let path = write_file(dir.path(), "catalog.JSON", &json);

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.records(), yaml_catalog.records());
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
}

#[test]
fn test_mixed_catalog_filtering() {
    init_test_logging();
    let mut engine = FilterEngine::new(Catalog::from_yaml(MIXED_CATALOG_YAML).unwrap());

    // Legal-text statuses are plain facet values too
    engine.set_facet(Facet::Status, Some("Abrogé"));
    assert_eq!(visible_ids(&engine), vec![102]);

    engine.set_facet(Facet::Status, Some("all"));
    engine.set_search_text("permis");
    assert_eq!(visible_ids(&engine), vec![2, 102]);

    engine.set_quick_search_text("décret");
    assert_eq!(visible_ids(&engine), vec![102]);
}

#[test]
fn test_sort_by_publish_date_mixes_formats() {
    let mut engine = FilterEngine::new(Catalog::from_yaml(MIXED_CATALOG_YAML).unwrap());
    engine.apply_sort(Some(SortSpec::ascending(SortField::PublishDate)));

    // 10 janvier 2024 < 2024-01-15, procedures have no date and go last
    assert_eq!(visible_ids(&engine), vec![102, 101, 1, 2]);

    engine.apply_sort(Some(SortSpec::descending(SortField::PublishDate)));
    assert_eq!(visible_ids(&engine), vec![101, 102, 1, 2]);
}

#[test]
fn test_full_session() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let catalog_path = write_file(dir.path(), "catalog.yaml", MIXED_CATALOG_YAML);
    let config_path = write_file(
        dir.path(),
        "config.yaml",
        "catalog: catalog.yaml\nshareBaseUrl: https://dalil.example.dz\n",
    );

    let config = DalilConfig::load(Some(&config_path)).unwrap();
    assert_eq!(config.catalog.as_deref(), Some(catalog_path.as_path()));

    let catalog = Catalog::load(config.catalog.as_deref().unwrap()).unwrap();
    let mut engine = FilterEngine::new(catalog);

    // Filter dialog confirms with only a digitization choice
    let update: FilterUpdate = serde_json::from_str(r#"{"digitization": "yes"}"#).unwrap();
    engine.apply_filter_update(&update);
    assert_eq!(visible_ids(&engine), vec![1, 101]);
    assert_eq!(engine.count(), 2);

    engine.apply_sort(Some("id:desc".parse().unwrap()));
    let visible = engine.visible_records();
    assert_eq!(visible[0].id, 101);

    let synthesizer = DetailSynthesizer::new(config.detail_config());
    let doc = synthesizer.open_detail(visible[0]);
    assert!(matches!(doc.body, DetailBody::LegalText { .. }));
    assert_eq!(doc.field("Journal Officiel"), Some("JO n° 101"));

    let event = synthesizer.invoke_action(visible[0], "share").unwrap();
    assert_eq!(
        event.payload,
        ActionPayload::Share {
            url: "https://dalil.example.dz/legal-text/101".to_string()
        }
    );

    let procedure = engine.catalog().get(1).unwrap();
    let doc = synthesizer.open_detail(procedure);
    assert_eq!(doc.field("Institution"), Some("Ministère du Commerce"));
    assert!(synthesizer.invoke_action(procedure, "share").is_err());
}

#[test]
fn test_default_synthesizer_share_origin() {
    let catalog = Catalog::from_yaml(MIXED_CATALOG_YAML).unwrap();
    let synthesizer = DetailSynthesizer::new(DetailConfig::default());
    assert_eq!(
        synthesizer.share_url(catalog.get(2).unwrap()),
        "https://dalil.local/procedure/2"
    );
}

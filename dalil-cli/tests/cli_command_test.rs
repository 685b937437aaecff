//! End-to-end tests for the `dalil` binary
//!
//! Every run gets an explicit `--config` inside a temp dir so a global
//! config on the host machine cannot leak into results.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const LEGAL_CATALOG: &str = r#"
records:
  - id: 101
    kind: legal_text
    title: Loi de finances 2024
    description: Loi de finances pour l'exercice 2024
    category: Finances
    type: loi
    status: En vigueur
    digitization: "yes"
    publishDate: "2023-12-24"
    joNumber: JO n° 86
  - id: 102
    kind: legal_text
    title: Décret exécutif relatif au registre de commerce
    description: Modalités d'immatriculation
    category: Commerce
    type: decret
    status: Suspendu
    digitization: "partially"
"#;

fn run(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_dalil"))
        .arg("--config")
        .arg(dir.join("config.yaml"))
        .args(args)
        .current_dir(dir)
        .output()?;
    Ok(output)
}

fn setup(config: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("config.yaml"), config)?;
    Ok(dir)
}

fn stdout_json(output: &Output) -> Result<serde_json::Value> {
    if !output.status.success() {
        anyhow::bail!(
            "dalil failed:\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_search_builtin_catalog_by_type() -> Result<()> {
    let dir = setup("downloadFormat: pdf\n")?;
    let output = run(dir.path(), &["search", "--type", "civil", "--json"])?;
    let json = stdout_json(&output)?;

    assert_eq!(json["count"], 3);
    let ids: Vec<u64> = json["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4, 6]);
    assert_eq!(json["selection"]["type"], "civil");
    Ok(())
}

#[test]
fn test_search_table_output_reports_count() -> Result<()> {
    let dir = setup("downloadFormat: pdf\n")?;
    let output = run(dir.path(), &["search", "passeport"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 procédure(s) trouvée(s)"));
    assert!(stdout.contains("Passeport biométrique"));
    Ok(())
}

#[test]
fn test_show_procedure_renders_steps() -> Result<()> {
    let dir = setup("downloadFormat: pdf\n")?;
    let output = run(dir.path(), &["show", "4"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Passeport biométrique"));
    assert!(stdout.contains("Étapes à suivre"));
    assert!(stdout.contains("Documents requis"));
    Ok(())
}

#[test]
fn test_download_uses_configured_format() -> Result<()> {
    let dir = setup("downloadFormat: docx\n")?;
    let output = run(dir.path(), &["action", "4", "download"])?;
    let json = stdout_json(&output)?;

    assert_eq!(json["actionKey"], "download");
    assert_eq!(json["recordId"], 4);
    assert_eq!(json["payload"]["format"], "docx");
    Ok(())
}

#[test]
fn test_share_legal_text_from_configured_catalog() -> Result<()> {
    let dir = setup("catalog: legal.yaml\nshareBaseUrl: https://dalil.example.dz\n")?;
    fs::write(dir.path().join("legal.yaml"), LEGAL_CATALOG)?;

    let output = run(dir.path(), &["action", "101", "share"])?;
    let json = stdout_json(&output)?;
    assert_eq!(
        json["payload"]["url"],
        "https://dalil.example.dz/legal-text/101"
    );

    let output = run(dir.path(), &["search"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 texte(s) trouvé(s)"));

    let output = run(dir.path(), &["search", "--status", "Suspendu", "--json"])?;
    let json = stdout_json(&output)?;
    assert_eq!(json["count"], 1);
    assert_eq!(json["records"][0]["id"], 102);
    Ok(())
}

#[test]
fn test_catalog_flag_overrides_config() -> Result<()> {
    let dir = setup("catalog: missing.yaml\n")?;
    fs::write(dir.path().join("legal.yaml"), LEGAL_CATALOG)?;

    let output = run(dir.path(), &["--catalog", "legal.yaml", "search", "--json"])?;
    let json = stdout_json(&output)?;
    assert_eq!(json["count"], 2);
    Ok(())
}

#[test]
fn test_invalid_action_fails() -> Result<()> {
    let dir = setup("downloadFormat: pdf\n")?;
    let output = run(dir.path(), &["action", "4", "teleport"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("teleport"));
    Ok(())
}

#[test]
fn test_missing_catalog_file_fails() -> Result<()> {
    let dir = setup("catalog: missing.yaml\n")?;
    let output = run(dir.path(), &["search"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.yaml"));
    Ok(())
}

//! Shared driver for the deck generator binaries.

use anyhow::{Context, Result};
use certdeck_core::{Deck, DeckOutline};
use certdeck_decks::DeckId;
use certdeck_pptx::{PptxReader, PptxWriter};
use std::fs;
use std::path::{Path, PathBuf};

/// Initialize env_logger: `warn` by default, `debug` when verbose.
/// `RUST_LOG` still takes precedence.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Build a deck and save it as `out_dir/<filename>`, replacing any
/// previous file. Returns the written path.
pub fn generate(id: DeckId, out_dir: &Path) -> Result<PathBuf> {
    let deck = id.build();
    let path = out_dir.join(id.filename());
    PptxWriter::new()
        .save(&deck, &path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(path)
}

/// Re-read a written deck and check its slide count.
pub fn check(id: DeckId, path: &Path) -> Result<DeckOutline> {
    PptxReader::new()
        .verify(path, id.announced_slides())
        .with_context(|| format!("Failed to verify {}", path.display()))
}

/// The two lines confirming a save: filename, then absolute location.
pub fn success_lines(id: DeckId, path: &Path) -> Vec<String> {
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    vec![
        format!(
            "✅ {} créée avec succès : {}",
            id.success_title(),
            id.filename()
        ),
        format!("📁 Fichier sauvegardé dans : {}", absolute.display()),
    ]
}

/// The one-line failure report.
pub fn failure_line(error: &anyhow::Error) -> String {
    format!(
        "❌ Erreur lors de la création de la présentation : {:#}",
        error
    )
}

/// Print the confirmation lines and the deck's banner.
pub fn report_success(id: DeckId, path: &Path) {
    for line in success_lines(id, path) {
        println!("{}", line);
    }
    println!();
    for line in id.banner() {
        println!("{}", line);
    }
}

/// Pretty JSON array of the built decks, in the given order.
pub fn outline_json(ids: &[DeckId]) -> Result<String> {
    let decks: Vec<Deck> = ids.iter().map(|id| id.build()).collect();
    serde_json::to_string_pretty(&decks).context("Failed to serialize deck outline")
}

/// Generate one deck into `out_dir` and print the outcome. Failures are
/// printed, never returned. Returns the written path on success.
pub fn generate_and_report(id: DeckId, out_dir: &Path) -> Option<PathBuf> {
    match generate(id, out_dir) {
        Ok(path) => {
            report_success(id, &path);
            Some(path)
        }
        Err(e) => {
            log::debug!("{:?}", e);
            println!("{}", failure_line(&e));
            None
        }
    }
}

/// Entry point of the single-deck binaries: generate into the current
/// directory and report. The process always exits successfully.
pub fn run_fixed(id: DeckId) {
    init_logging(false);
    generate_and_report(id, Path::new("."));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_expected_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate(DeckId::Bloc4Maintenance, dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap(),
            "Presentation_Bloc4_Maintenance_Evolution.pptx"
        );
        let outline = check(DeckId::Bloc4Maintenance, &path).unwrap();
        assert_eq!(outline.slide_count(), 12);
    }

    #[test]
    fn test_regenerating_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate(DeckId::Bloc2Enhanced, dir.path()).unwrap();
        let first = fs::read(&path).unwrap();
        generate(DeckId::Bloc2Enhanced, dir.path()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = generate(DeckId::Bloc4Enhanced, &missing).unwrap_err();

        let line = failure_line(&err);
        assert_eq!(
            line,
            format!(
                "❌ Erreur lors de la création de la présentation : Failed to save {}: Failed to write file: {}",
                missing.join("Presentation_Bloc4_Enhanced.pptx").display(),
                err.root_cause()
            )
        );
        assert_eq!(line.matches(&err.root_cause().to_string()).count(), 1);
    }

    #[test]
    fn test_os_error_is_reported_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Presentation_Bloc4_Enhanced.pptx")).unwrap();
        let err = generate(DeckId::Bloc4Enhanced, dir.path()).unwrap_err();

        let line = failure_line(&err);
        assert!(line.contains("Failed to write file: "));
        assert_eq!(line.matches(&err.root_cause().to_string()).count(), 1);
    }

    #[test]
    fn test_failed_generation_is_reported_not_returned() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Presentation_Bloc2_Enhanced.pptx");
        fs::create_dir(&target).unwrap();

        assert!(generate_and_report(DeckId::Bloc2Enhanced, dir.path()).is_none());
        assert!(target.is_dir());
        assert!(!dir.path().join(".Presentation_Bloc2_Enhanced.pptx.tmp").exists());
    }

    #[test]
    fn test_generate_and_report_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate_and_report(DeckId::Bloc4Maintenance, dir.path()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_outline_is_one_json_array() {
        let json = outline_json(&[DeckId::Bloc4Maintenance, DeckId::Bloc2Enhanced]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let decks = value.as_array().unwrap();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[1]["slides"].as_array().unwrap().len(), 13);
    }

    #[test]
    fn test_success_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = generate(DeckId::Bloc4Enhanced, dir.path()).unwrap();
        let lines = success_lines(DeckId::Bloc4Enhanced, &path);
        assert_eq!(
            lines[0],
            "✅ Présentation améliorée créée avec succès : Presentation_Bloc4_Enhanced.pptx"
        );
        assert!(lines[1].starts_with("📁 Fichier sauvegardé dans : "));
        assert!(lines[1].ends_with("Presentation_Bloc4_Enhanced.pptx"));
    }
}

//! Tests for the project configuration
use std::fs;
use std::path::PathBuf;

use archaisms::config::{AnalysisOptions, ProjectConfig, CONFIG_FILE_NAME};

#[test]
fn default_layout_hangs_off_the_root() {
  let config = ProjectConfig::new("/data/poetry");
  assert_eq!(config.records_csv_path(), PathBuf::from("/data/poetry/dataset/archaisms.csv"));
  assert_eq!(config.records_bin_path(), PathBuf::from("/data/poetry/dataset/archaisms.bin"));
  assert_eq!(config.wordlist_path(), PathBuf::from("/data/poetry/dataset/archaisms_wordlist.txt"));
  assert_eq!(
    config.result_path("archaism_by_movement.csv"),
    PathBuf::from("/data/poetry/results/archaism_by_movement.csv")
  );
  assert_eq!(config.analysis, AnalysisOptions::default());
}

#[test]
fn missing_override_keeps_defaults() {
  let dir = tempfile::tempdir().unwrap();
  let config = ProjectConfig::load(dir.path()).unwrap();
  assert_eq!(config, ProjectConfig::new(dir.path()));
}

#[test]
fn partial_override_is_merged() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(
    dir.path().join(CONFIG_FILE_NAME),
    r#"{"results_dir": "out", "poems_csv": "/srv/poems.csv", "analysis": {"top_authors": 3}}"#,
  )
  .unwrap();
  let config = ProjectConfig::load(dir.path()).unwrap();
  assert_eq!(config.root, dir.path().to_path_buf());
  assert_eq!(config.result_path("x.csv"), dir.path().join("out/x.csv"));
  assert_eq!(config.poems_csv_path(), PathBuf::from("/srv/poems.csv"));
  assert_eq!(config.analysis.top_authors, 3);
  assert_eq!(config.analysis.min_century_poems, 50);
  assert_eq!(config.dictionary_source_path(), dir.path().join("dataset/устаревшие.txt"));
}

#[test]
fn malformed_override_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
  assert!(ProjectConfig::load(dir.path()).is_err());
}

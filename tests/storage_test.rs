//! Tests for persisting the record table and the lookup word list
use std::collections::BTreeMap;
use std::fs;

use archaisms::dictionary;
use archaisms::storage;
use archaisms::LookupSet;

#[test]
fn record_table_survives_both_representations() {
  let dir = tempfile::tempdir().unwrap();
  let csv_path = dir.path().join("dataset/archaisms.csv");
  let bin_path = dir.path().join("dataset/archaisms.bin");
  let report = dictionary::parse_file("tests/resources/dictionary_sample.txt").unwrap();

  storage::save_records(&report.records, &csv_path, &bin_path).unwrap();
  assert_eq!(storage::read_records_csv(&csv_path).unwrap(), report.records);
  assert_eq!(storage::read_records_binary(&bin_path).unwrap(), report.records);
  assert_eq!(storage::load_records(&csv_path, &bin_path).unwrap(), report.records);

  let header = fs::read_to_string(&csv_path).unwrap();
  assert!(header.starts_with("word,definition,variants,letter,original\n"));
}

#[test]
fn csv_is_the_fallback_table() {
  let dir = tempfile::tempdir().unwrap();
  let csv_path = dir.path().join("archaisms.csv");
  let bin_path = dir.path().join("archaisms.bin");
  let report = dictionary::parse_str("А\nАки, яко – как\nАбие – тотчас");

  storage::write_records_csv(&report.records, &csv_path).unwrap();
  let loaded = storage::load_records(&csv_path, &bin_path).unwrap();
  assert_eq!(loaded, report.records);
  assert_eq!(loaded[1].variants, None);

  // a corrupt mirror falls back to the CSV table as well
  fs::write(&bin_path, b"not bincode").unwrap();
  assert_eq!(storage::load_records(&csv_path, &bin_path).unwrap(), report.records);
}

#[test]
fn missing_record_table_is_reported() {
  let dir = tempfile::tempdir().unwrap();
  let err = storage::load_records(&dir.path().join("a.csv"), &dir.path().join("a.bin")).unwrap_err();
  assert!(err.is_missing_input());
}

#[test]
fn lookup_file_is_sorted_and_rewritten() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("archaisms_wordlist.txt");
  fs::write(&path, "stale\ncontent\nfrom\nan\nolder\nrun\n").unwrap();

  let report = dictionary::parse_str("А\nЯко – как\nАки, абы – как");
  let lookup = LookupSet::from_records(&report.records);
  let written = storage::write_lookup_file(&lookup, &path).unwrap();
  assert_eq!(written, 3);
  assert_eq!(fs::read_to_string(&path).unwrap(), "абы\nаки\nяко");

  let reloaded = storage::load_lookup_file(&path).unwrap();
  assert_eq!(reloaded, lookup);
}

#[test]
fn table_writes_leave_no_partial_files() {
  let dir = tempfile::tempdir().unwrap();
  let csv_path = dir.path().join("archaisms.csv");
  let bin_path = dir.path().join("archaisms.bin");
  fs::write(&csv_path, "stale table").unwrap();

  let report = dictionary::parse_str("А\nАки, яко – как");
  storage::save_records(&report.records, &csv_path, &bin_path).unwrap();
  assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
  assert_eq!(storage::read_records_csv(&csv_path).unwrap(), report.records);
}

#[derive(serde::Serialize)]
struct NestedRow {
  word: String,
  senses: BTreeMap<String, String>,
}

#[test]
fn failed_table_write_keeps_previous_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("table.csv");
  fs::write(&path, "word\nаки\n").unwrap();

  let rows = vec![NestedRow {
    word: "аки".to_string(),
    senses: BTreeMap::new(),
  }];
  assert!(storage::write_table(&rows, &path).is_err());
  assert_eq!(fs::read_to_string(&path).unwrap(), "word\nаки\n");
  assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

//! Tests for the legal-text dictionary parser
use archaisms::dictionary::{self, parse_str, section_letter, strip_annotations};
use archaisms::record::DictionaryStats;
use archaisms::util::test::RESOURCE_DICTIONARIES;

#[test]
fn section_headers_update_letter_without_records() {
  let report = parse_str("А\nБ\nВ\n");
  assert!(report.records.is_empty());
  assert_eq!(report.skipped, 0);

  let report = parse_str("А\nБ\nВыя – шея");
  assert_eq!(report.records.len(), 1);
  assert_eq!(report.records[0].letter, Some('Б'));
}

#[test]
fn header_detection_is_strict() {
  assert_eq!(section_letter("Ж"), Some('Ж'));
  assert_eq!(section_letter("Q"), Some('Q'));
  assert_eq!(section_letter("ж"), None);
  assert_eq!(section_letter("Аз"), None);
  assert_eq!(section_letter("1"), None);
  assert_eq!(section_letter(""), None);
}

#[test]
fn front_matter_is_ignored() {
  let report = parse_str("Предисловие – о словаре\nещё – одна строка\n");
  assert!(report.records.is_empty());
  // front matter is not counted as malformed
  assert_eq!(report.skipped, 0);
}

#[test]
fn single_word_entry() {
  let report = parse_str("С\nслово – определение");
  assert_eq!(report.records.len(), 1);
  let record = &report.records[0];
  assert_eq!(record.word, "слово");
  assert_eq!(record.definition, "определение");
  assert_eq!(record.variants, None);
  assert_eq!(record.original, "слово");
  assert_eq!(record.letter, Some('С'));
}

#[test]
fn variants_are_split_from_headword() {
  let report = parse_str("С\nслово1, слово2 – определение");
  let record = &report.records[0];
  assert_eq!(record.word, "слово1");
  assert_eq!(record.variants.as_deref(), Some("слово2"));

  let report = parse_str("С\nслово1,слово2 ,  слово3 – определение");
  let record = &report.records[0];
  assert_eq!(record.variants.as_deref(), Some("слово2, слово3"));
  assert_eq!(record.original, "слово1,слово2 ,  слово3");
}

#[test]
fn annotations_are_stripped_from_headword_only() {
  let report = parse_str("С\nслово (устар.) – определение");
  assert_eq!(report.records[0].word, "слово");
  assert_eq!(report.records[0].original, "слово (устар.)");

  let report = parse_str("С\nслово, словеса (мн.) – определение");
  assert_eq!(report.records[0].word, "слово");
  assert_eq!(report.records[0].variants.as_deref(), Some("словеса (мн.)"));

  assert_eq!(strip_annotations("перст (церк.) (поэт.)"), "перст");
}

#[test]
fn hyphen_and_en_dash_both_separate() {
  let report = parse_str("Б\nБрег - берег\nБраздить – бороздить");
  assert_eq!(report.records.len(), 2);
  assert_eq!(report.records[0].definition, "берег");
  assert_eq!(report.records[1].definition, "бороздить");
}

#[test]
fn malformed_lines_are_counted() {
  let report = parse_str("А\nбез тире\n– только определение\nАз (устар.) – я\n(помета) – пусто");
  assert_eq!(report.records.len(), 1);
  assert_eq!(report.skipped, 3);
}

#[test]
fn blank_lines_never_change_state() {
  let report = parse_str("\n\nА\n\n   \nАбие – тотчас\n\n");
  assert_eq!(report.records.len(), 1);
  assert_eq!(report.records[0].letter, Some('А'));
  assert_eq!(report.skipped, 0);
}

#[test]
/// The worked example: one section, two entries
fn end_to_end_scenario() {
  let report = parse_str("А\nАки, яко – как, подобно\nАбие – тотчас\n");
  assert_eq!(report.records.len(), 2);
  assert!(report.records.iter().all(|r| r.letter == Some('А')));
  assert_eq!(report.records[0].word, "Аки");
  assert_eq!(report.records[0].variants.as_deref(), Some("яко"));
  assert_eq!(report.records[0].definition, "как, подобно");
  assert_eq!(report.records[1].word, "Абие");
  assert_eq!(report.records[1].variants, None);
}

#[test]
fn can_parse_resource_dictionaries() {
  assert!(!RESOURCE_DICTIONARIES.is_empty());
  for path in RESOURCE_DICTIONARIES.iter() {
    let report = dictionary::parse_file(path).unwrap();
    assert!(!report.records.is_empty(), "no records in {}", path);
    assert!(report.records.iter().all(|r| !r.word.is_empty()));
  }
}

#[test]
fn sample_dictionary_statistics() {
  let report = dictionary::parse_file("tests/resources/dictionary_sample.txt").unwrap();
  assert_eq!(report.records.len(), 8);
  assert_eq!(report.skipped, 1);

  let stats = DictionaryStats::from_records(&report.records);
  assert_eq!(stats.total_records, 8);
  assert_eq!(stats.with_variants, 2);
  let letters: Vec<(char, usize)> = stats.letters.into_iter().collect();
  assert_eq!(letters, vec![('А', 3), ('Б', 2), ('В', 3)]);
}

#[test]
fn missing_dictionary_file_is_reported() {
  let err = dictionary::parse_file("tests/resources/no_such_dictionary.txt").unwrap_err();
  assert!(err.is_missing_input());
}

//! The normalized dictionary entry and summary statistics over a collection of them
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One normalized entry of the archaism dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchaismRecord {
  /// canonical headword, compared case-insensitively
  pub word: String,
  /// free-text gloss
  pub definition: String,
  /// comma-joined alternate spellings sharing the definition
  pub variants: Option<String>,
  /// section letter the entry was parsed under
  pub letter: Option<char>,
  /// raw word-group text as it appeared in the source
  pub original: String,
}

impl ArchaismRecord {
  /// Trimmed, non-empty tokens of the `variants` field, in source order
  pub fn variant_list(&self) -> Vec<&str> {
    match self.variants {
      Some(ref variants) => variants
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect(),
      None => Vec::new(),
    }
  }
}

/// Auditing statistics over a record collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DictionaryStats {
  /// number of records
  pub total_records: usize,
  /// records carrying at least one variant spelling
  pub with_variants: usize,
  /// records per section letter, in letter order
  pub letters: BTreeMap<char, usize>,
}

impl DictionaryStats {
  /// Tally a record collection
  pub fn from_records(records: &[ArchaismRecord]) -> Self {
    let mut stats = DictionaryStats {
      total_records: records.len(),
      ..DictionaryStats::default()
    };
    for record in records {
      if record.variants.is_some() {
        stats.with_variants += 1;
      }
      if let Some(letter) = record.letter {
        *stats.letters.entry(letter).or_insert(0) += 1;
      }
    }
    stats
  }
}

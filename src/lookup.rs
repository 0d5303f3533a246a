//! The flattened, case-folded set of every headword and variant spelling.
//!
//! This is the only view of the dictionary the analyses consume, and
//! [`LookupSet::from_records`] is the only place it is computed.
use std::collections::HashSet;
use std::iter::FromIterator;

use crate::record::ArchaismRecord;

/// Membership-only set of lowercase archaisms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupSet {
  words: HashSet<String>,
}

impl LookupSet {
  /// Union of every lowercased headword and every trimmed, lowercased variant
  pub fn from_records(records: &[ArchaismRecord]) -> Self {
    let mut words = HashSet::new();
    for record in records {
      words.insert(record.word.to_lowercase());
      for variant in record.variant_list() {
        words.insert(variant.to_lowercase());
      }
    }
    LookupSet { words }
  }

  /// Case-insensitive membership test
  pub fn contains(&self, word: &str) -> bool {
    if self.words.contains(word) {
      true
    } else {
      self.words.contains(&word.to_lowercase())
    }
  }

  /// number of distinct strings
  pub fn len(&self) -> usize { self.words.len() }

  /// true when no record contributed anything
  pub fn is_empty(&self) -> bool { self.words.is_empty() }

  /// All members in ascending order, as written to the word-list file
  pub fn sorted(&self) -> Vec<&str> {
    let mut as_vec: Vec<&str> = self.words.iter().map(String::as_str).collect();
    as_vec.sort_unstable();
    as_vec
  }
}

impl<S: AsRef<str>> FromIterator<S> for LookupSet {
  /// Collect already-flattened words (e.g. lines of the word-list file), lowercasing them
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    LookupSet {
      words: iter
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect(),
    }
  }
}

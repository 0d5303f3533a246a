//! Word tokenization of poem texts
use regex::Regex;
use std::collections::HashSet;

use crate::stopwords;

/// Stores auxiliary resources required by the tokenizer so that they need to be initialized only
/// once
pub struct Tokenizer {
  /// set of stopwords, used to filter word counts
  pub stopwords: HashSet<&'static str>,
  /// regular expression for a single lowercase Cyrillic word
  pub word: Regex,
  /// shortest token (in characters) that is kept
  pub min_length: usize,
}
impl Default for Tokenizer {
  fn default() -> Tokenizer {
    Tokenizer {
      stopwords: stopwords::load(),
      word: Regex::new(r"\b[а-яё]+\b").unwrap(),
      min_length: 1,
    }
  }
}

impl Tokenizer {
  /// A tokenizer dropping every token shorter than `min_length` characters
  pub fn with_min_length(min_length: usize) -> Self {
    Tokenizer {
      min_length,
      ..Tokenizer::default()
    }
  }

  /// Lowercased Russian words of `text`, in order of appearance.
  /// Cyrillic runs glued to Latin letters or digits (e.g. "мirъ") are not words.
  pub fn words(&self, text: &str) -> Vec<String> {
    let lowercase = text.to_lowercase();
    self
      .word
      .find_iter(&lowercase)
      .map(|m| m.as_str())
      .filter(|w| self.min_length <= 1 || w.chars().count() >= self.min_length)
      .map(str::to_string)
      .collect()
  }
}

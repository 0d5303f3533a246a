//! Word frequency counting
//! (only unigrams are needed for the per-century frequency lists)

use std::collections::{HashMap, HashSet};

/// Records the frequencies of single words
#[derive(Debug, Clone, Default)]
pub struct Unigrams {
  /// hashmap for the unigram counts
  pub map: HashMap<String, usize>,
}

impl Unigrams {
  /// Creates a new, empty Unigrams struct
  pub fn new() -> Self { Unigrams::default() }
  /// Get the word count
  pub fn get(&self, word: &str) -> usize {
    match self.map.get(word) {
      Some(count) => *count,
      None => 0,
    }
  }
  /// insert a word
  pub fn insert(&mut self, word: String) {
    let counter = self.map.entry(word).or_insert(0);
    *counter += 1;
  }
  /// get the number of different words inserted
  pub fn count(&self) -> usize { self.map.len() }
  /// total number of insertions
  pub fn total(&self) -> usize { self.map.values().sum() }

  /// get the inserted words, most frequent first, ties broken alphabetically
  pub fn sort(&self) -> Vec<(String, usize)> {
    let mut as_vec = self.map.clone().into_iter().collect::<Vec<_>>();
    as_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    as_vec
  }
  /// the `n` most frequent words
  pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
    let mut sorted = self.sort();
    sorted.truncate(n);
    sorted
  }

  /// Keep words seen at least `min_count` times that are not stopwords
  pub fn filtered(&self, min_count: usize, stopwords: &HashSet<&'static str>) -> Unigrams {
    Unigrams {
      map: self
        .map
        .iter()
        .filter(|(word, count)| **count >= min_count && !stopwords.contains(word.as_str()))
        .map(|(word, count)| (word.clone(), *count))
        .collect(),
    }
  }

  /// Reweigh so that the rarest words get the largest weight: `max - count + 1`
  pub fn inverted(&self) -> Unigrams {
    let max = self.map.values().cloned().max().unwrap_or(0);
    Unigrams {
      map: self
        .map
        .iter()
        .map(|(word, count)| (word.clone(), max - count + 1))
        .collect(),
    }
  }
}

impl<S: Into<String>> Extend<S> for Unigrams {
  fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
    for word in iter {
      self.insert(word.into());
    }
  }
}

//! Merging manually curated headwords into an existing record collection
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{require_file, Result};
use crate::lookup::LookupSet;
use crate::record::ArchaismRecord;

/// Definition given to every record synthesized from a manual word list
pub const MANUAL_DEFINITION: &str = "Добавлено из анализа облаков слов (ручная проверка)";

/// Outcome of a reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
  /// existing and synthesized records, sorted by `word`
  pub records: Vec<ArchaismRecord>,
  /// number of synthesized records
  pub added: usize,
  /// proposed words that were already known, in proposal order
  pub already_present: Vec<String>,
}

/// A manual word list after case folding and deduplication
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualWords {
  /// distinct lowercase candidates, sorted
  pub words: Vec<String>,
  /// non-blank lines read, duplicates included
  pub total_lines: usize,
}

/// Uppercase the first character, leaving the rest as is
pub fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Placeholder record for a manually added headword
pub fn manual_record(word: &str) -> ArchaismRecord {
  let display = capitalize(word);
  ArchaismRecord {
    letter: word.chars().next().and_then(|c| c.to_uppercase().next()),
    word: display.clone(),
    definition: MANUAL_DEFINITION.to_string(),
    variants: None,
    original: display,
  }
}

/// Append records for every proposed word not yet covered by `existing`
/// (headwords and variants, case-insensitively) and re-sort by `word`.
/// Proposals are trimmed; blank ones are ignored.
pub fn reconcile<S: AsRef<str>>(existing: Vec<ArchaismRecord>, proposed: &[S]) -> Reconciliation {
  let known = LookupSet::from_records(&existing);
  let mut already_present = Vec::new();
  let mut to_add = Vec::new();
  for word in proposed {
    let word = word.as_ref().trim();
    if word.is_empty() {
      continue;
    }
    // capitalizing may not round-trip through lowercase (e.g. "ı" -> "I" -> "i"),
    // so the key the new record would contribute is checked as well
    let candidate = manual_record(word);
    if known.contains(word) || known.contains(&candidate.word) {
      already_present.push(word.to_string());
    } else {
      to_add.push(candidate);
    }
  }
  debug!(
    present = already_present.len(),
    new = to_add.len(),
    "partitioned proposed words"
  );

  let added = to_add.len();
  let mut records = existing;
  records.extend(to_add);
  records.sort_by(|a, b| a.word.cmp(&b.word));

  Reconciliation {
    records,
    added,
    already_present,
  }
}

/// Fold a raw word list: trim, drop blanks, lowercase, dedup, sort
pub fn fold_manual_words<'a, I>(lines: I) -> ManualWords
where I: IntoIterator<Item = &'a str> {
  let mut total_lines = 0;
  let mut unique = BTreeSet::new();
  for line in lines {
    let word = line.trim();
    if word.is_empty() {
      continue;
    }
    total_lines += 1;
    unique.insert(word.to_lowercase());
  }
  ManualWords {
    words: unique.into_iter().collect(),
    total_lines,
  }
}

/// Load a manual word list, one candidate per line
pub fn load_manual_words<P: AsRef<Path>>(path: P) -> Result<ManualWords> {
  let path = path.as_ref();
  require_file(path)?;
  let text = fs::read_to_string(path)?;
  let manual = fold_manual_words(text.lines());
  info!(
    path = %path.display(),
    lines = manual.total_lines,
    unique = manual.words.len(),
    "loaded manual word list"
  );
  Ok(manual)
}

//! Parser for the legal-text dictionary of archaic words.
//!
//! The source is a flat text file: some front matter, then sections opened by a
//! single uppercase letter on its own line, each followed by entries of the shape
//! `word1, word2 – definition`. Parsing is lenient: lines that do not fit the entry
//! shape are dropped and only counted.
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{require_file, Result};
use crate::record::ArchaismRecord;

lazy_static! {
  // words part (no dashes), an en-dash or hyphen, then the definition
  static ref ENTRY_LINE: Regex = Regex::new(r"^([^–\-]+?)\s*[–\-]\s*(.+)$").unwrap();
  static ref PARENTHESIZED: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();
}

/// Outcome of a dictionary parse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
  /// records in source order
  pub records: Vec<ArchaismRecord>,
  /// non-blank lines after the first section header that yielded no record
  pub skipped: usize,
}

/// A section header is a single uppercase alphabetic character
pub fn section_letter(trimmed_line: &str) -> Option<char> {
  let mut chars = trimmed_line.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) if c.is_alphabetic() && c.is_uppercase() => Some(c),
    _ => None,
  }
}

/// Remove every `(...)` annotation, together with the whitespace preceding it
pub fn strip_annotations(word: &str) -> String {
  PARENTHESIZED.replace_all(word, "").trim().to_string()
}

/// Parse a single entry line under section `letter`.
/// Returns `None` for lines that do not have the `words – definition` shape.
pub fn parse_entry(line: &str, letter: Option<char>) -> Option<ArchaismRecord> {
  let captures = ENTRY_LINE.captures(line.trim())?;
  let words_part = captures.get(1)?.as_str().trim();
  let definition = captures.get(2)?.as_str().trim();

  let words: Vec<&str> = words_part.split(',').map(str::trim).collect();
  let word = strip_annotations(words[0]);
  if word.is_empty() {
    return None;
  }
  let variants = if words.len() > 1 {
    Some(words[1..].join(", "))
  } else {
    None
  };

  Some(ArchaismRecord {
    word,
    definition: definition.to_string(),
    variants,
    letter,
    original: words_part.to_string(),
  })
}

/// Parse the dictionary body given as a sequence of lines
pub fn parse_lines<'a, I>(lines: I) -> ParseReport
where I: IntoIterator<Item = &'a str> {
  let mut report = ParseReport::default();
  let mut current_letter: Option<char> = None;
  let mut started = false;

  for (line_number, raw_line) in lines.into_iter().enumerate() {
    let line = raw_line.trim();
    if line.is_empty() {
      continue;
    }
    if let Some(letter) = section_letter(line) {
      current_letter = Some(letter);
      started = true;
      continue;
    }
    // front matter before the first section
    if !started {
      continue;
    }
    match parse_entry(line, current_letter) {
      Some(record) => report.records.push(record),
      None => {
        debug!(line = line_number + 1, content = line, "skipping malformed dictionary line");
        report.skipped += 1;
      },
    }
  }
  report
}

/// Parse dictionary text held in memory
pub fn parse_str(text: &str) -> ParseReport { parse_lines(text.lines()) }

/// Read and parse a dictionary file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseReport> {
  let path = path.as_ref();
  require_file(path)?;
  info!(path = %path.display(), "parsing archaism dictionary");
  let text = fs::read_to_string(path)?;
  let report = parse_str(&text);
  info!(
    records = report.records.len(),
    skipped = report.skipped,
    "dictionary parsed"
  );
  Ok(report)
}

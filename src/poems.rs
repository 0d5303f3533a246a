//! The poem corpus, as a table with one poem per row
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{require_file, Result};

/// One poem of the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct Poem {
  /// author name as given by the corpus
  pub author: String,
  /// poem title
  pub name: String,
  /// full text
  pub text: String,
  /// year of writing, if known
  pub year: Option<i32>,
}

// Row layout of the corpus table. Only the columns we use are listed, the rest
// (`date_from`, `date_to`, `themes`) are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct PoemRow {
  #[serde(default)]
  author: Option<String>,
  #[serde(default)]
  name: Option<String>,
  #[serde(default)]
  text: Option<String>,
  #[serde(default)]
  year: Option<String>,
}

/// Parse a year cell. Tables exported with missing years store the column as floats
/// ("1829.0"), which are truncated; anything non-numeric yields `None`.
pub fn parse_year(cell: &str) -> Option<i32> {
  let cell = cell.trim();
  if cell.is_empty() {
    return None;
  }
  if let Ok(year) = cell.parse::<i32>() {
    return Some(year);
  }
  match cell.parse::<f64>() {
    Ok(year) if year.is_finite() => Some(year.trunc() as i32),
    _ => None,
  }
}

impl From<PoemRow> for Poem {
  fn from(row: PoemRow) -> Poem {
    Poem {
      author: row.author.unwrap_or_default(),
      name: row.name.unwrap_or_default(),
      text: row.text.unwrap_or_default(),
      year: row.year.as_deref().and_then(parse_year),
    }
  }
}

/// Load the poem table
pub fn load_poems<P: AsRef<Path>>(path: P) -> Result<Vec<Poem>> {
  let path = path.as_ref();
  require_file(path)?;
  let mut reader = csv::Reader::from_path(path)?;
  let mut poems = Vec::new();
  for row in reader.deserialize::<PoemRow>() {
    poems.push(Poem::from(row?));
  }
  let dated = poems.iter().filter(|p| p.year.is_some()).count();
  if dated < poems.len() {
    warn!(undated = poems.len() - dated, "poems without a usable year");
  }
  info!(poems = poems.len(), dated, path = %path.display(), "loaded poem corpus");
  Ok(poems)
}

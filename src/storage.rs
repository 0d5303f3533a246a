//! Persistence of the record table (CSV plus a bincode mirror) and of the
//! lookup word list.
//!
//! The CSV and binary representations are only ever written together through
//! [`save_records`]; every table write goes through a temporary file in the
//! destination directory, so a failed write leaves the previous file in place.
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::errors::{require_file, ArchaismError, Result};
use crate::lookup::LookupSet;
use crate::record::ArchaismRecord;

static BUFFER_CAPACITY: usize = 1_048_576;

fn ensure_parent(path: &Path) -> Result<&Path> {
  let parent = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };
  fs::create_dir_all(parent)?;
  Ok(parent)
}

/// Write the record table as CSV with columns `word,definition,variants,letter,original`
pub fn write_records_csv(records: &[ArchaismRecord], path: &Path) -> Result<()> {
  write_table(records, path)
}

/// Read a record table written by [`write_records_csv`]
pub fn read_records_csv(path: &Path) -> Result<Vec<ArchaismRecord>> { read_table(path) }

/// Atomically write the bincode mirror of the record table
pub fn write_records_binary(records: &[ArchaismRecord], path: &Path) -> Result<()> {
  let parent = ensure_parent(path)?;
  let temp_file = NamedTempFile::new_in(parent)?;
  {
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, records)?;
    writer.flush()?;
  }
  temp_file.persist(path)?;
  Ok(())
}

/// Read the bincode mirror of the record table
pub fn read_records_binary(path: &Path) -> Result<Vec<ArchaismRecord>> {
  require_file(path)?;
  let reader = BufReader::new(File::open(path)?);
  Ok(bincode::deserialize_from(reader)?)
}

/// Persist both representations of the record table, CSV first
pub fn save_records(records: &[ArchaismRecord], csv_path: &Path, bin_path: &Path) -> Result<()> {
  write_records_csv(records, csv_path)?;
  write_records_binary(records, bin_path)?;
  info!(
    records = records.len(),
    csv = %csv_path.display(),
    binary = %bin_path.display(),
    "saved record table"
  );
  Ok(())
}

/// Load the record table, preferring the binary mirror and falling back to CSV
pub fn load_records(csv_path: &Path, bin_path: &Path) -> Result<Vec<ArchaismRecord>> {
  if bin_path.exists() {
    match read_records_binary(bin_path) {
      Ok(records) => return Ok(records),
      Err(e) => warn!(error = %e, "unreadable binary record table, falling back to CSV"),
    }
  }
  if !csv_path.exists() {
    return Err(ArchaismError::MissingInput(csv_path.to_path_buf()));
  }
  read_records_csv(csv_path)
}

/// Rewrite the lookup word-list file: every member, sorted, one per line
pub fn write_lookup_file(lookup: &LookupSet, path: &Path) -> Result<usize> {
  ensure_parent(path)?;
  let words = lookup.sorted();
  fs::write(path, words.join("\n"))?;
  info!(words = words.len(), path = %path.display(), "wrote lookup word list");
  Ok(words.len())
}

/// Read a lookup word-list file, skipping blank lines
pub fn load_lookup_file(path: &Path) -> Result<LookupSet> {
  require_file(path)?;
  let text = fs::read_to_string(path)?;
  Ok(text.lines().collect())
}

/// Atomically write any serializable rows as a CSV table
pub fn write_table<T: serde::Serialize>(rows: &[T], path: &Path) -> Result<()> {
  let parent = ensure_parent(path)?;
  let temp_file = NamedTempFile::new_in(parent)?;
  {
    let mut writer = csv::Writer::from_writer(BufWriter::with_capacity(BUFFER_CAPACITY, &temp_file));
    for row in rows {
      writer.serialize(row)?;
    }
    writer.flush()?;
  }
  temp_file.persist(path)?;
  Ok(())
}

/// Read a CSV table of deserializable rows
pub fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  require_file(path)?;
  let mut reader = csv::Reader::from_path(path)?;
  let mut rows = Vec::new();
  for row in reader.deserialize() {
    rows.push(row?);
  }
  Ok(rows)
}

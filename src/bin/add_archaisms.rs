/// Merges a manually curated word list into the archaism record table.
/// Words already present as headwords or variant spellings are left alone; the
/// table, its binary mirror and the lookup word list are rewritten only when
/// something was added.
/// $ cargo run --release --bin add_archaisms [/path/to/project/root]
use std::error::Error;
use std::time::Instant;

use archaisms::config::ProjectConfig;
use archaisms::reconcile;
use archaisms::storage;
use archaisms::util;
use archaisms::LookupSet;

static SHOWN_PRESENT: usize = 10;

pub fn main() -> Result<(), Box<dyn Error>> {
  util::init_logging();
  let start = Instant::now();
  let config = ProjectConfig::load(util::project_root())?;

  let manual = match reconcile::load_manual_words(config.manual_wordlist_path()) {
    Ok(manual) => manual,
    Err(e) => util::exit_with(&e),
  };
  let existing = match storage::load_records(&config.records_csv_path(), &config.records_bin_path()) {
    Ok(records) => records,
    Err(e) => util::exit_with(&e),
  };
  let before = existing.len();

  let result = reconcile::reconcile(existing, &manual.words);
  println!("{:?} candidate words checked;", manual.words.len());
  println!("{:?} already in the dictionary;", result.already_present.len());
  for word in result.already_present.iter().take(SHOWN_PRESENT) {
    println!("  - {}", word);
  }
  if result.already_present.len() > SHOWN_PRESENT {
    println!("  ... and {:?} more", result.already_present.len() - SHOWN_PRESENT);
  }
  println!("{:?} new words added", result.added);

  if result.added > 0 {
    storage::save_records(
      &result.records,
      &config.records_csv_path(),
      &config.records_bin_path(),
    )?;
    let lookup = LookupSet::from_records(&result.records);
    storage::write_lookup_file(&lookup, &config.wordlist_path())?;
  } else {
    println!("Dictionary unchanged, every word was already known");
  }
  println!("{:?} -> {:?} dictionary records", before, result.records.len());

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Reconciliation finished in {:?}s", duration_sec);
  Ok(())
}

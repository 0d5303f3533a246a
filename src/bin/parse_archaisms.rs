/// Parses the legal-text dictionary of archaic words into the record table,
/// its binary mirror and the lookup word list.
/// $ cargo run --release --bin parse_archaisms [/path/to/project/root]
use std::error::Error;
use std::time::Instant;

use archaisms::config::ProjectConfig;
use archaisms::dictionary;
use archaisms::record::DictionaryStats;
use archaisms::storage;
use archaisms::util;
use archaisms::LookupSet;

pub fn main() -> Result<(), Box<dyn Error>> {
  util::init_logging();
  let start = Instant::now();
  let config = ProjectConfig::load(util::project_root())?;

  let report = match dictionary::parse_file(config.dictionary_source_path()) {
    Ok(report) => report,
    Err(e) => util::exit_with(&e),
  };
  if report.skipped > 0 {
    println!(
      "{:?} lines did not match the 'words – definition' shape and were skipped",
      report.skipped
    );
  }

  let stats = DictionaryStats::from_records(&report.records);
  println!("{:?} dictionary records;", stats.total_records);
  println!("{:?} records with variant spellings;", stats.with_variants);
  for (letter, count) in &stats.letters {
    println!("  {}: {:?}", letter, count);
  }

  storage::save_records(
    &report.records,
    &config.records_csv_path(),
    &config.records_bin_path(),
  )?;
  let lookup = LookupSet::from_records(&report.records);
  let written = storage::write_lookup_file(&lookup, &config.wordlist_path())?;
  println!("{:?} unique words (headwords and variants)", written);

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Dictionary parsing finished in {:?}s", duration_sec);
  Ok(())
}

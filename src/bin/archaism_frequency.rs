/// Archaism frequency by decade, century and author over the poem corpus.
/// Writes `archaism_frequency_by_{decade,century,author}.csv` into the results directory.
/// $ cargo run --release --bin archaism_frequency [/path/to/project/root]
use std::error::Error;
use std::time::Instant;

use archaisms::config::ProjectConfig;
use archaisms::frequency::{self, CorpusSummary};
use archaisms::poems;
use archaisms::storage;
use archaisms::tokenizer::Tokenizer;
use archaisms::util;
use archaisms::LookupSet;

pub fn main() -> Result<(), Box<dyn Error>> {
  util::init_logging();
  let start = Instant::now();
  let config = ProjectConfig::load(util::project_root())?;
  let options = &config.analysis;

  let poems = match poems::load_poems(config.poems_csv_path()) {
    Ok(poems) => poems,
    Err(e) => util::exit_with(&e),
  };
  let records = match storage::load_records(&config.records_csv_path(), &config.records_bin_path()) {
    Ok(records) => records,
    Err(e) => util::exit_with(&e),
  };
  let lookup = LookupSet::from_records(&records);
  println!("{:?} poems, {:?} archaisms in the lookup set", poems.len(), lookup.len());

  let tokenizer = Tokenizer::default();
  let decades = frequency::decade_statistics(&poems, &lookup, &tokenizer);
  for row in &decades {
    println!(
      "  {}s: {:?} poems, {:?} archaisms, {:.2} per 1000 words",
      row.decade, row.poem_count, row.archaism_count, row.archaisms_per_1000
    );
  }
  let authors = frequency::author_statistics(&poems, &lookup, &tokenizer, options.top_authors);
  for row in &authors {
    println!("  {}: {:.2} per 1000 words", row.author, row.archaisms_per_1000);
  }
  let centuries = frequency::century_statistics(&decades, options.min_century_poems);

  storage::write_table(&decades, &config.result_path("archaism_frequency_by_decade.csv"))?;
  storage::write_table(&authors, &config.result_path("archaism_frequency_by_author.csv"))?;
  storage::write_table(&centuries, &config.result_path("archaism_frequency_by_century.csv"))?;

  let summary = CorpusSummary::from_decades(&decades);
  println!("---");
  println!("{:?} words in dated poems;", summary.total_words);
  println!("{:?} archaisms found;", summary.total_archaisms);
  println!("{:.2} archaisms per 1000 words overall", summary.archaisms_per_1000);
  if let Some(max) = summary.max_decade {
    println!("peak: {}s with {:.2}", max.decade, max.archaisms_per_1000);
  }
  if let Some(min) = summary.min_decade {
    println!("low: {}s with {:.2}", min.decade, min.archaisms_per_1000);
  }

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Frequency analysis finished in {:?}s", duration_sec);
  Ok(())
}

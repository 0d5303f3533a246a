/// Most frequent and rarest words of each century, the weights behind the
/// per-century word clouds.
/// Writes `words_<century>_century_{frequent,rare}.csv` into the results directory.
/// $ cargo run --release --bin century_words [/path/to/project/root]
use serde::Serialize;
use std::error::Error;
use std::time::Instant;

use archaisms::config::ProjectConfig;
use archaisms::frequency;
use archaisms::poems;
use archaisms::storage;
use archaisms::tokenizer::Tokenizer;
use archaisms::util;

#[derive(Debug, Serialize)]
struct WordWeight<'a> {
  word: &'a str,
  weight: usize,
}

fn weights(list: &[(String, usize)]) -> Vec<WordWeight<'_>> {
  list
    .iter()
    .map(|(word, weight)| WordWeight { word, weight: *weight })
    .collect()
}

pub fn main() -> Result<(), Box<dyn Error>> {
  util::init_logging();
  let start = Instant::now();
  let config = ProjectConfig::load(util::project_root())?;
  let options = &config.analysis;

  let poems = match poems::load_poems(config.poems_csv_path()) {
    Ok(poems) => poems,
    Err(e) => util::exit_with(&e),
  };
  let tokenizer = Tokenizer::with_min_length(options.min_word_length);

  for &century in &options.centuries {
    let counts = frequency::century_word_counts(&poems, century, &tokenizer);
    if counts.count() == 0 {
      println!("No poems for century {}, skipping", century);
      continue;
    }
    println!("century {}: top words {:?}", century, counts.most_common(10));

    let filtered = counts.filtered(options.min_word_count, &tokenizer.stopwords);
    println!("  {:?} words left after filtering", filtered.count());
    let frequent = filtered.most_common(options.max_words);
    let rare = filtered.inverted().most_common(options.max_words);

    storage::write_table(
      &weights(&frequent),
      &config.result_path(&format!("words_{}_century_frequent.csv", century)),
    )?;
    storage::write_table(
      &weights(&rare),
      &config.result_path(&format!("words_{}_century_rare.csv", century)),
    )?;
  }

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Century word frequencies finished in {:?}s", duration_sec);
  Ok(())
}

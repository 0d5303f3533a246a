/// Archaisms found in sample poems of a few well-known authors, read against the
/// lookup word list, plus the average archaism share over each author's first poems.
/// $ cargo run --release --bin find_archaisms [/path/to/project/root]
use std::collections::BTreeSet;
use std::error::Error;
use std::time::Instant;

use archaisms::config::ProjectConfig;
use archaisms::frequency;
use archaisms::poems;
use archaisms::storage;
use archaisms::tokenizer::Tokenizer;
use archaisms::util;

static SAMPLE_AUTHORS: [&str; 4] = [
  "Александр Пушкин",
  "Михаил Лермонтов",
  "Сергей Есенин",
  "Владимир Высоцкий",
];
static POEMS_PER_AUTHOR: usize = 10;
static SHOWN_ARCHAISMS: usize = 10;

pub fn main() -> Result<(), Box<dyn Error>> {
  util::init_logging();
  let start = Instant::now();
  let config = ProjectConfig::load(util::project_root())?;

  let poems = match poems::load_poems(config.poems_csv_path()) {
    Ok(poems) => poems,
    Err(e) => util::exit_with(&e),
  };
  let lookup = match storage::load_lookup_file(&config.wordlist_path()) {
    Ok(lookup) => lookup,
    Err(e) => util::exit_with(&e),
  };
  println!("{:?} poems, {:?} archaisms in the word list", poems.len(), lookup.len());

  let tokenizer = Tokenizer::default();
  println!("---");
  for author in SAMPLE_AUTHORS.iter() {
    let poem = match poems.iter().find(|p| p.author == *author) {
      Some(poem) => poem,
      None => continue,
    };
    let analysis = frequency::analyze_poem(&poem.text, &lookup, &tokenizer);
    match poem.year {
      Some(year) => println!("{}, \"{}\" ({})", author, poem.name, year),
      None => println!("{}, \"{}\"", author, poem.name),
    }
    println!(
      "  {:?} words, {:?} archaisms ({:.1}%)",
      analysis.total_words, analysis.archaism_count, analysis.archaism_percentage
    );
    let distinct: BTreeSet<&str> = analysis.found_archaisms.iter().map(String::as_str).collect();
    if !distinct.is_empty() {
      let shown: Vec<&str> = distinct.into_iter().take(SHOWN_ARCHAISMS).collect();
      println!("  found: {}", shown.join(", "));
    }
  }

  println!("---");
  for author in SAMPLE_AUTHORS.iter() {
    let shares: Vec<f64> = poems
      .iter()
      .filter(|p| p.author == *author)
      .take(POEMS_PER_AUTHOR)
      .map(|p| frequency::analyze_poem(&p.text, &lookup, &tokenizer).archaism_percentage)
      .collect();
    if shares.is_empty() {
      continue;
    }
    let average = shares.iter().sum::<f64>() / shares.len() as f64;
    println!("{}: {:.2}% archaisms on average over {:?} poems", author, average, shares.len());
  }

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Archaism search finished in {:?}s", duration_sec);
  Ok(())
}

/// Compares archaism usage across literary movements, based on the decade and
/// author tables produced by `archaism_frequency`.
/// $ cargo run --release --bin comparative_analysis [/path/to/project/root]
use std::error::Error;
use std::time::Instant;

use archaisms::config::ProjectConfig;
use archaisms::frequency::{AuthorStats, DecadeStats};
use archaisms::movements;
use archaisms::storage;
use archaisms::util;

pub fn main() -> Result<(), Box<dyn Error>> {
  util::init_logging();
  let start = Instant::now();
  let config = ProjectConfig::load(util::project_root())?;

  let decades: Vec<DecadeStats> =
    match storage::read_table(&config.result_path("archaism_frequency_by_decade.csv")) {
      Ok(rows) => rows,
      Err(e) => util::exit_with(&e),
    };
  let authors: Vec<AuthorStats> =
    match storage::read_table(&config.result_path("archaism_frequency_by_author.csv")) {
      Ok(rows) => rows,
      Err(e) => util::exit_with(&e),
    };
  println!("{:?} decades, {:?} authors", decades.len(), authors.len());

  let known_movements = movements::literary_movements();
  let movement_stats = movements::movement_statistics(&decades, &known_movements);
  let (peaks, threshold) = movements::peak_periods(&decades, config.analysis.peak_percentile);
  let author_names: Vec<&str> = authors.iter().map(|a| a.author.as_str()).collect();
  let classification = movements::classify_authors(&author_names, &known_movements);

  if let Some(threshold) = threshold {
    println!(
      "{:?} peak decades at or above {:.2} per 1000 words:",
      peaks.len(),
      threshold
    );
    for peak in &peaks {
      println!("  {}s: {:.2}", peak.decade, peak.archaisms_per_1000);
    }
  }
  for row in &movement_stats {
    println!(
      "  {} ({}): avg {:.2}, max {:.2}",
      row.movement, row.period, row.avg_frequency, row.max_frequency
    );
  }

  storage::write_table(&movement_stats, &config.result_path("archaism_by_movement.csv"))?;
  storage::write_table(&peaks, &config.result_path("archaism_peak_periods.csv"))?;
  storage::write_table(&classification, &config.result_path("author_movements.csv"))?;

  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Comparative analysis finished in {:?}s", duration_sec);
  Ok(())
}

//! Explicit configuration for every entry point: where the inputs and outputs
//! live, and the knobs of the statistical analyses.
//!
//! Paths are derived from a single project root. An optional `archaisms.json`
//! in that root may override any field; absent fields keep their defaults.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::Result;

/// File name of the optional JSON override, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "archaisms.json";

/// Locations of all inputs and outputs, relative to a project root
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// project root directory, all relative paths below are joined onto it
  #[serde(skip)]
  pub root: PathBuf,
  /// legal-text dictionary source
  pub dictionary_source: PathBuf,
  /// manually curated word list, one candidate per line
  pub manual_wordlist: PathBuf,
  /// persisted record table
  pub records_csv: PathBuf,
  /// binary mirror of the record table
  pub records_bin: PathBuf,
  /// sorted lookup word list
  pub wordlist: PathBuf,
  /// poem corpus table
  pub poems_csv: PathBuf,
  /// directory receiving every statistics table
  pub results_dir: PathBuf,
  /// analysis parameters
  pub analysis: AnalysisOptions,
}

impl Default for ProjectConfig {
  fn default() -> ProjectConfig {
    ProjectConfig {
      root: PathBuf::from("."),
      dictionary_source: PathBuf::from("dataset/устаревшие.txt"),
      manual_wordlist: PathBuf::from("dataset/устаревшие_из_облака.txt"),
      records_csv: PathBuf::from("dataset/archaisms.csv"),
      records_bin: PathBuf::from("dataset/archaisms.bin"),
      wordlist: PathBuf::from("dataset/archaisms_wordlist.txt"),
      poems_csv: PathBuf::from("dataset/poems.csv"),
      results_dir: PathBuf::from("results"),
      analysis: AnalysisOptions::default(),
    }
  }
}

impl ProjectConfig {
  /// Default layout under `root`, without consulting any override file
  pub fn new<P: AsRef<Path>>(root: P) -> Self {
    ProjectConfig {
      root: root.as_ref().to_path_buf(),
      ..ProjectConfig::default()
    }
  }

  /// Layout under `root`, with `archaisms.json` applied on top when present
  pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
    let root = root.as_ref();
    let override_path = root.join(CONFIG_FILE_NAME);
    if !override_path.exists() {
      return Ok(ProjectConfig::new(root));
    }
    info!(path = %override_path.display(), "applying configuration override");
    let contents = fs::read_to_string(&override_path)?;
    let mut config: ProjectConfig = serde_json::from_str(&contents)?;
    config.root = root.to_path_buf();
    Ok(config)
  }

  /// Resolve a configured path against the project root
  pub fn resolve(&self, relative: &Path) -> PathBuf {
    if relative.is_absolute() {
      relative.to_path_buf()
    } else {
      self.root.join(relative)
    }
  }

  /// Absolute (root-joined) dictionary source path
  pub fn dictionary_source_path(&self) -> PathBuf { self.resolve(&self.dictionary_source) }
  /// Root-joined manual word list path
  pub fn manual_wordlist_path(&self) -> PathBuf { self.resolve(&self.manual_wordlist) }
  /// Root-joined record table path
  pub fn records_csv_path(&self) -> PathBuf { self.resolve(&self.records_csv) }
  /// Root-joined binary mirror path
  pub fn records_bin_path(&self) -> PathBuf { self.resolve(&self.records_bin) }
  /// Root-joined lookup word list path
  pub fn wordlist_path(&self) -> PathBuf { self.resolve(&self.wordlist) }
  /// Root-joined poem table path
  pub fn poems_csv_path(&self) -> PathBuf { self.resolve(&self.poems_csv) }

  /// Root-joined path of a named file inside the results directory
  pub fn result_path(&self, file_name: &str) -> PathBuf {
    self.resolve(&self.results_dir).join(file_name)
  }
}

/// Parameters of the statistical analyses
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
  /// how many authors (by poem count) enter the per-author table
  pub top_authors: usize,
  /// centuries backed by fewer poems are dropped from the century table
  pub min_century_poems: usize,
  /// decades at or above this percentile of the per-1000 rate are peaks
  pub peak_percentile: f64,
  /// shortest token kept by the century word-frequency analysis
  pub min_word_length: usize,
  /// rarer words are dropped from the century word-frequency lists
  pub min_word_count: usize,
  /// maximal number of words in each century word-frequency list
  pub max_words: usize,
  /// centuries covered by the word-frequency analysis
  pub centuries: Vec<i32>,
}

impl Default for AnalysisOptions {
  fn default() -> AnalysisOptions {
    AnalysisOptions {
      top_authors: 10,
      min_century_poems: 50,
      peak_percentile: 75.0,
      min_word_length: 3,
      min_word_count: 3,
      max_words: 200,
      centuries: vec![18, 19, 20],
    }
  }
}

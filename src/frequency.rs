//! Archaism usage statistics over the poem corpus: per poem, per decade,
//! per century and per author.
//!
//! Every rate is expressed as archaisms per 1000 tokens and is 0 when a group
//! contains no tokens at all.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use crate::lookup::LookupSet;
use crate::ngrams::Unigrams;
use crate::poems::Poem;
use crate::tokenizer::Tokenizer;

/// Archaism usage in a single text
#[derive(Debug, Clone, PartialEq)]
pub struct PoemAnalysis {
  /// tokens in the text
  pub total_words: usize,
  /// tokens found in the lookup set
  pub archaism_count: usize,
  /// share of archaisms among tokens, in percent
  pub archaism_percentage: f64,
  /// every archaism occurrence, in order of appearance
  pub found_archaisms: Vec<String>,
}

/// Archaism usage in the poems of one decade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeStats {
  /// first year of the decade, e.g. 1820
  pub decade: i32,
  /// dated poems in the decade
  pub poem_count: usize,
  /// tokens in those poems
  pub total_words: usize,
  /// archaism occurrences
  pub archaism_count: usize,
  /// archaisms per 1000 tokens
  pub archaisms_per_1000: f64,
}

/// Archaism usage of one author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
  /// author name
  pub author: String,
  /// poems by the author
  pub poem_count: usize,
  /// tokens in those poems
  pub total_words: usize,
  /// archaism occurrences
  pub archaism_count: usize,
  /// archaisms per 1000 tokens
  pub archaisms_per_1000: f64,
  /// truncated mean year of the dated poems
  pub avg_year: Option<i32>,
}

/// Archaism usage aggregated over the decades of a century
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenturyStats {
  /// ordinal century, 19 for the 1800s
  pub century: i32,
  /// poems in the century
  pub poem_count: usize,
  /// tokens in those poems
  pub total_words: usize,
  /// archaism occurrences
  pub archaism_count: usize,
  /// archaisms per 1000 tokens
  pub archaisms_per_1000: f64,
}

/// Corpus-wide figures derived from the decade table
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSummary {
  /// tokens in all dated poems
  pub total_words: usize,
  /// archaism occurrences in all dated poems
  pub total_archaisms: usize,
  /// archaisms per 1000 tokens over the whole corpus
  pub archaisms_per_1000: f64,
  /// decade with the highest rate
  pub max_decade: Option<DecadeStats>,
  /// decade with the lowest rate
  pub min_decade: Option<DecadeStats>,
}

/// archaisms per 1000 words, 0 for an empty group
pub fn per_thousand(archaisms: usize, words: usize) -> f64 {
  if words == 0 {
    0.0
  } else {
    archaisms as f64 / words as f64 * 1000.0
  }
}

/// Decade a year belongs to, e.g. 1829 -> 1820
pub fn decade_of_year(year: i32) -> i32 { year.div_euclid(10) * 10 }

/// Century of a decade as used by the century table, e.g. 1800 -> 19
pub fn century_of_decade(decade: i32) -> i32 { decade.div_euclid(100) + 1 }

/// Ordinal century of a year, e.g. 1800 -> 18, 1801 -> 19
pub fn century_of_year(year: i32) -> i32 { (year - 1).div_euclid(100) + 1 }

/// Token and archaism counts of one text
fn count_text(text: &str, lookup: &LookupSet, tokenizer: &Tokenizer) -> (usize, usize) {
  let words = tokenizer.words(text);
  let archaisms = words.iter().filter(|w| lookup.contains(w)).count();
  (words.len(), archaisms)
}

/// Analyze a single poem text
pub fn analyze_poem(text: &str, lookup: &LookupSet, tokenizer: &Tokenizer) -> PoemAnalysis {
  let words = tokenizer.words(text);
  let total_words = words.len();
  let found_archaisms: Vec<String> = words.into_iter().filter(|w| lookup.contains(w)).collect();
  let archaism_count = found_archaisms.len();
  let archaism_percentage = if total_words == 0 {
    0.0
  } else {
    archaism_count as f64 / total_words as f64 * 100.0
  };
  PoemAnalysis {
    total_words,
    archaism_count,
    archaism_percentage,
    found_archaisms,
  }
}

/// Per-decade statistics over the dated poems, in ascending decade order
pub fn decade_statistics(poems: &[Poem], lookup: &LookupSet, tokenizer: &Tokenizer) -> Vec<DecadeStats> {
  let mut by_decade: BTreeMap<i32, (usize, usize, usize)> = BTreeMap::new();
  for poem in poems {
    let year = match poem.year {
      Some(year) => year,
      None => continue,
    };
    let (words, archaisms) = count_text(&poem.text, lookup, tokenizer);
    let entry = by_decade.entry(decade_of_year(year)).or_insert((0, 0, 0));
    entry.0 += 1;
    entry.1 += words;
    entry.2 += archaisms;
  }

  let stats: Vec<DecadeStats> = by_decade
    .into_iter()
    .map(|(decade, (poem_count, total_words, archaism_count))| DecadeStats {
      decade,
      poem_count,
      total_words,
      archaism_count,
      archaisms_per_1000: per_thousand(archaism_count, total_words),
    })
    .collect();
  for row in &stats {
    debug!(
      decade = row.decade,
      poems = row.poem_count,
      archaisms = row.archaism_count,
      rate = row.archaisms_per_1000,
      "decade statistics"
    );
  }
  info!(decades = stats.len(), "computed decade statistics");
  stats
}

/// Authors ordered by poem count, most prolific first (ties alphabetically).
/// Poems without an author are not counted.
pub fn top_authors(poems: &[Poem], top_n: usize) -> Vec<(String, usize)> {
  let mut counts: HashMap<&str, usize> = HashMap::new();
  for poem in poems.iter().filter(|p| !p.author.trim().is_empty()) {
    *counts.entry(poem.author.as_str()).or_insert(0) += 1;
  }
  let mut as_vec: Vec<(String, usize)> =
    counts.into_iter().map(|(author, count)| (author.to_string(), count)).collect();
  as_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
  as_vec.truncate(top_n);
  as_vec
}

/// Statistics for the `top_n` most prolific authors, in that order
pub fn author_statistics(
  poems: &[Poem],
  lookup: &LookupSet,
  tokenizer: &Tokenizer,
  top_n: usize,
) -> Vec<AuthorStats> {
  let stats: Vec<AuthorStats> = top_authors(poems, top_n)
    .into_iter()
    .map(|(author, poem_count)| {
      let mut total_words = 0;
      let mut archaism_count = 0;
      let mut year_sum: i64 = 0;
      let mut year_count: i64 = 0;
      for poem in poems.iter().filter(|p| p.author == author) {
        let (words, archaisms) = count_text(&poem.text, lookup, tokenizer);
        total_words += words;
        archaism_count += archaisms;
        if let Some(year) = poem.year {
          year_sum += i64::from(year);
          year_count += 1;
        }
      }
      let avg_year = if year_count > 0 {
        Some((year_sum as f64 / year_count as f64).trunc() as i32)
      } else {
        None
      };
      AuthorStats {
        author,
        poem_count,
        total_words,
        archaism_count,
        archaisms_per_1000: per_thousand(archaism_count, total_words),
        avg_year,
      }
    })
    .collect();
  info!(authors = stats.len(), "computed author statistics");
  stats
}

/// Aggregate decades into centuries, dropping centuries with fewer than `min_poems` poems
pub fn century_statistics(decades: &[DecadeStats], min_poems: usize) -> Vec<CenturyStats> {
  let mut by_century: BTreeMap<i32, (usize, usize, usize)> = BTreeMap::new();
  for row in decades {
    let entry = by_century.entry(century_of_decade(row.decade)).or_insert((0, 0, 0));
    entry.0 += row.poem_count;
    entry.1 += row.total_words;
    entry.2 += row.archaism_count;
  }
  by_century
    .into_iter()
    .filter(|(_, (poem_count, _, _))| *poem_count >= min_poems)
    .map(|(century, (poem_count, total_words, archaism_count))| CenturyStats {
      century,
      poem_count,
      total_words,
      archaism_count,
      archaisms_per_1000: per_thousand(archaism_count, total_words),
    })
    .collect()
}

impl CorpusSummary {
  /// Totals, overall rate and extreme decades; the first decade wins ties
  pub fn from_decades(decades: &[DecadeStats]) -> Self {
    let total_words = decades.iter().map(|d| d.total_words).sum();
    let total_archaisms = decades.iter().map(|d| d.archaism_count).sum();
    let mut max_decade: Option<&DecadeStats> = None;
    let mut min_decade: Option<&DecadeStats> = None;
    for row in decades {
      if max_decade.map_or(true, |m| row.archaisms_per_1000 > m.archaisms_per_1000) {
        max_decade = Some(row);
      }
      if min_decade.map_or(true, |m| row.archaisms_per_1000 < m.archaisms_per_1000) {
        min_decade = Some(row);
      }
    }
    CorpusSummary {
      total_words,
      total_archaisms,
      archaisms_per_1000: per_thousand(total_archaisms, total_words),
      max_decade: max_decade.cloned(),
      min_decade: min_decade.cloned(),
    }
  }
}

/// Word counts over the poems written in `century` (see [`century_of_year`])
pub fn century_word_counts(poems: &[Poem], century: i32, tokenizer: &Tokenizer) -> Unigrams {
  let mut counts = Unigrams::new();
  let mut poem_count = 0;
  for poem in poems {
    if poem.year.map(century_of_year) != Some(century) {
      continue;
    }
    poem_count += 1;
    counts.extend(tokenizer.words(&poem.text));
  }
  info!(
    century,
    poems = poem_count,
    words = counts.total(),
    unique = counts.count(),
    "collected century word counts"
  );
  counts
}

//! Literary movements of Russian poetry and the comparison of archaism usage
//! across them
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::frequency::{decade_of_year, DecadeStats};

/// Label given to authors that belong to no known movement
pub const UNCLASSIFIED: &str = "Не определено";

/// A literary movement with its active period and representative authors
#[derive(Debug, Clone, PartialEq)]
pub struct LiteraryMovement {
  /// movement name
  pub name: &'static str,
  /// first and last year of activity
  pub period: (i32, i32),
  /// representative authors
  pub authors: &'static [&'static str],
  /// one-line characterization
  pub description: &'static str,
}

/// The movements considered by the comparative analysis, in chronological order
pub fn literary_movements() -> Vec<LiteraryMovement> {
  vec![
    LiteraryMovement {
      name: "Классицизм",
      period: (1730, 1800),
      authors: &["Михаил Ломоносов", "Гавриил Державин", "Александр Сумароков"],
      description: "Ориентация на античные образцы, строгость формы",
    },
    LiteraryMovement {
      name: "Сентиментализм",
      period: (1770, 1820),
      authors: &["Николай Карамзин", "Василий Жуковский"],
      description: "Культ чувства, внимание к внутреннему миру",
    },
    LiteraryMovement {
      name: "Романтизм",
      period: (1800, 1840),
      authors: &["Александр Пушкин", "Михаил Лермонтов", "Федор Тютчев"],
      description: "Интерес к истории, народности, высокий стиль",
    },
    LiteraryMovement {
      name: "Реализм",
      period: (1840, 1890),
      authors: &["Николай Некрасов", "Афанасий Фет", "Аполлон Майков"],
      description: "Объективное изображение действительности",
    },
    LiteraryMovement {
      name: "Символизм",
      period: (1890, 1910),
      authors: &["Валерий Брюсов", "Константин Бальмонт", "Александр Блок", "Федор Сологуб"],
      description: "Символы, мистика, поиск высших смыслов",
    },
    LiteraryMovement {
      name: "Акмеизм",
      period: (1910, 1920),
      authors: &["Анна Ахматова", "Николай Гумилев", "Осип Мандельштам"],
      description: "Возврат к материальному миру, ясность образов",
    },
    LiteraryMovement {
      name: "Футуризм",
      period: (1910, 1930),
      authors: &["Владимир Маяковский", "Велимир Хлебников", "Игорь Северянин"],
      description: "Отказ от традиций, словотворчество",
    },
    LiteraryMovement {
      name: "Советская поэзия",
      period: (1920, 1990),
      authors: &["Владимир Высоцкий", "Илья Эренбург", "Анатолий Жигулин"],
      description: "Идеологическая поэзия, урбанизация языка",
    },
  ]
}

/// Archaism usage over the decades of one movement's period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementStats {
  /// movement name
  pub movement: String,
  /// active period as "start-end"
  pub period: String,
  /// mean of the per-decade rates
  pub avg_frequency: f64,
  /// highest per-decade rate
  pub max_frequency: f64,
  /// archaism occurrences over the period
  pub total_archaisms: usize,
  /// tokens over the period
  pub total_words: usize,
  /// one-line characterization
  pub description: String,
}

/// An author paired with the movement it is classified under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorMovement {
  /// author name
  pub author: String,
  /// movement name, or [`UNCLASSIFIED`]
  pub movement: String,
}

/// Statistics for every movement whose period overlaps at least one decade
pub fn movement_statistics(decades: &[DecadeStats], movements: &[LiteraryMovement]) -> Vec<MovementStats> {
  let mut stats = Vec::new();
  for movement in movements {
    let start = decade_of_year(movement.period.0);
    let end = decade_of_year(movement.period.1);
    let period: Vec<&DecadeStats> = decades
      .iter()
      .filter(|d| d.decade >= start && d.decade <= end)
      .collect();
    if period.is_empty() {
      continue;
    }
    let rates: Vec<f64> = period.iter().map(|d| d.archaisms_per_1000).collect();
    stats.push(MovementStats {
      movement: movement.name.to_string(),
      period: format!("{}-{}", movement.period.0, movement.period.1),
      avg_frequency: rates.iter().sum::<f64>() / rates.len() as f64,
      max_frequency: rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
      total_archaisms: period.iter().map(|d| d.archaism_count).sum(),
      total_words: period.iter().map(|d| d.total_words).sum(),
      description: movement.description.to_string(),
    });
  }
  stats
}

/// Percentile of `values` by linear interpolation between closest ranks,
/// `None` for an empty input
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
  if values.is_empty() {
    return None;
  }
  let mut sorted = values.to_vec();
  sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
  let rank = (pct.max(0.0).min(100.0) / 100.0) * (sorted.len() - 1) as f64;
  let lower = rank.floor() as usize;
  let upper = rank.ceil() as usize;
  let fraction = rank - lower as f64;
  Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Decades whose rate reaches the `pct` percentile, highest rate first, with the threshold
pub fn peak_periods(decades: &[DecadeStats], pct: f64) -> (Vec<DecadeStats>, Option<f64>) {
  let rates: Vec<f64> = decades.iter().map(|d| d.archaisms_per_1000).collect();
  let threshold = match percentile(&rates, pct) {
    Some(threshold) => threshold,
    None => return (Vec::new(), None),
  };
  let mut peaks: Vec<DecadeStats> = decades
    .iter()
    .filter(|d| d.archaisms_per_1000 >= threshold)
    .cloned()
    .collect();
  peaks.sort_by(|a, b| {
    b.archaisms_per_1000
      .partial_cmp(&a.archaisms_per_1000)
      .unwrap_or(Ordering::Equal)
  });
  (peaks, Some(threshold))
}

/// Movement an author is listed under; later movements win for authors listed twice
pub fn classify_author<'m>(author: &str, movements: &'m [LiteraryMovement]) -> &'m str {
  movements
    .iter()
    .rev()
    .find(|m| m.authors.iter().any(|a| *a == author))
    .map_or(UNCLASSIFIED, |m| m.name)
}

/// Classify every author, preserving input order
pub fn classify_authors<S: AsRef<str>>(authors: &[S], movements: &[LiteraryMovement]) -> Vec<AuthorMovement> {
  authors
    .iter()
    .map(|author| AuthorMovement {
      author: author.as_ref().to_string(),
      movement: classify_author(author.as_ref(), movements).to_string(),
    })
    .collect()
}

//! Tests for the literary movement comparison
use archaisms::frequency::DecadeStats;
use archaisms::movements::{self, literary_movements, UNCLASSIFIED};

fn decade(decade: i32, archaism_count: usize, total_words: usize) -> DecadeStats {
  DecadeStats {
    decade,
    poem_count: 1,
    total_words,
    archaism_count,
    archaisms_per_1000: archaism_count as f64 / total_words as f64 * 1000.0,
  }
}

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn percentile_interpolates_linearly() {
  assert_eq!(movements::percentile(&[], 75.0), None);
  assert!(close(movements::percentile(&[4.0, 1.0, 3.0, 2.0], 75.0).unwrap(), 3.25));
  assert!(close(movements::percentile(&[4.0, 1.0, 3.0, 2.0], 50.0).unwrap(), 2.5));
  assert!(close(movements::percentile(&[7.0], 75.0).unwrap(), 7.0));
}

#[test]
fn peaks_are_sorted_by_rate() {
  let decades = vec![decade(1780, 1, 1000), decade(1790, 4, 1000), decade(1800, 3, 1000), decade(1810, 2, 1000)];
  let (peaks, threshold) = movements::peak_periods(&decades, 75.0);
  assert!(close(threshold.unwrap(), 3.25));
  assert_eq!(peaks.iter().map(|p| p.decade).collect::<Vec<_>>(), vec![1790]);

  let (peaks, _) = movements::peak_periods(&decades, 50.0);
  assert_eq!(peaks.iter().map(|p| p.decade).collect::<Vec<_>>(), vec![1790, 1800]);

  let (none, no_threshold) = movements::peak_periods(&[], 75.0);
  assert!(none.is_empty());
  assert!(no_threshold.is_none());
}

#[test]
fn movements_aggregate_their_decades() {
  let decades = vec![decade(1820, 5, 13), decade(1830, 0, 3), decade(1910, 0, 5)];
  let stats = movements::movement_statistics(&decades, &literary_movements());
  let names: Vec<&str> = stats.iter().map(|s| s.movement.as_str()).collect();
  assert_eq!(names, vec!["Сентиментализм", "Романтизм", "Символизм", "Акмеизм", "Футуризм"]);

  let romanticism = &stats[1];
  assert_eq!(romanticism.period, "1800-1840");
  assert_eq!(romanticism.total_archaisms, 5);
  assert_eq!(romanticism.total_words, 16);
  assert!(close(romanticism.max_frequency, 5.0 / 13.0 * 1000.0));
  assert!(close(romanticism.avg_frequency, 5.0 / 13.0 * 1000.0 / 2.0));
}

#[test]
fn authors_are_classified() {
  let movements = literary_movements();
  assert_eq!(movements.len(), 8);
  assert_eq!(movements::classify_author("Александр Пушкин", &movements), "Романтизм");
  assert_eq!(movements::classify_author("Анна Ахматова", &movements), "Акмеизм");
  assert_eq!(movements::classify_author("Неизвестный", &movements), UNCLASSIFIED);

  let classified = movements::classify_authors(&["Александр Блок", "Неизвестный"], &movements);
  assert_eq!(classified[0].movement, "Символизм");
  assert_eq!(classified[1].author, "Неизвестный");
  assert_eq!(classified[1].movement, UNCLASSIFIED);
}

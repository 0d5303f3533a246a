//! Test utilities for the archaisms crate
use lazy_static::lazy_static;
use walkdir::WalkDir;

lazy_static! { // preload the list of fixture dictionaries, for easy sanity checks
  ///  shorthand global for all dictionary fixtures (`.txt`) in the tests/resources directory
  pub static ref RESOURCE_DICTIONARIES: Vec<String> = WalkDir::new("./tests/resources")
    .into_iter()
    .filter_entry(|entry| {
      if entry.file_type().is_dir() {
        true
      } else {
        let name = entry.file_name().to_string_lossy();
        name.starts_with("dictionary") && name.ends_with(".txt")
      }
    })
    .filter_map(|e| e.ok())
    .filter(|e| !e.file_type().is_dir())
    .map(|entry| entry.path().to_string_lossy().to_string())
    .collect();
}

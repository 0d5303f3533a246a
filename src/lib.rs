//! # The `archaisms` library
//! Archaic vocabulary in Russian poetry: a dictionary of archaisms parsed from a
//! legal-text source and curated word lists, the lookup set derived from it, and
//! frequency statistics of archaism usage across decades, authors and literary
//! movements.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

#[macro_use]
pub mod util;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod frequency;
pub mod lookup;
pub mod movements;
pub mod ngrams;
pub mod poems;
pub mod reconcile;
pub mod record;
pub mod stopwords;
pub mod storage;
pub mod tokenizer;

pub use crate::errors::{ArchaismError, Result};
pub use crate::lookup::LookupSet;
pub use crate::record::ArchaismRecord;

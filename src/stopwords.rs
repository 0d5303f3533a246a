//! Russian stopwords: conjunctions, prepositions, pronouns and particles that
//! would otherwise dominate every frequency list
use std::collections::HashSet;

/// Load the stopword set
pub fn load() -> HashSet<&'static str> {
  [
    "что", "как", "это", "все", "его", "еще", "уже", "для", "так", "где", "кто", "меня", "она",
    "они", "мне", "тот", "том", "без", "под", "над", "при", "про", "или", "тут", "там", "вот",
    "весь", "эти", "если", "ему", "ней", "них", "мой", "мои", "твой", "свой", "того", "чем",
    "которые", "которых", "была", "было", "были", "будет",
  ]
  .iter()
  .cloned()
  .collect()
}

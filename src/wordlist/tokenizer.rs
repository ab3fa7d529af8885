// Word and bigram tokenizers
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Mode;

// Maximal runs of Unicode letters (general category L), any script. Combining
// marks (category M) stay attached to the letter they follow, so a decomposed
// accent does not split its word.
static LETTER_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\p{L}\p{M}*)+").expect("valid letter pattern"));

/// Lazy token stream for one block of text.
pub fn tokenize(mode: Mode, text: &str) -> Box<dyn Iterator<Item = String> + '_> {
    match mode {
        Mode::Words => Box::new(words(text).map(str::to_string)),
        Mode::Bigrams => Box::new(bigrams(text)),
    }
}

/// Letter runs, case preserved. Everything else is a separator.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    LETTER_RUN.find_iter(text).map(|m| m.as_str())
}

/// Adjacent word pairs, both lower-cased, joined by one space.
///
/// `n` words give `n - 1` pairs in document order.
pub fn bigrams(text: &str) -> impl Iterator<Item = String> + '_ {
    let mut previous: Option<String> = None;
    words(text).map(str::to_lowercase).filter_map(move |word| {
        let pair = previous.as_deref().map(|prev| format!("{prev} {word}"));
        previous = Some(word);
        pair
    })
}

// Token accumulation, deduplication and ranking
use std::collections::HashSet;

use super::normalizer::normalize;
use super::tokenizer::words;
use crate::types::Mode;

/// Unique normalized tokens collected over one run.
#[derive(Debug, Default)]
pub struct TokenSet {
    mode: Mode,
    tokens: HashSet<String>,
    seen: usize,
}

impl TokenSet {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Normalize and insert. Returns `false` if nothing new was added.
    ///
    /// NFKC can expand a letter into several words (U+FDFA) or into an upper
    /// case letter (U+1D400). Words are re-split into letter runs afterwards
    /// and bigrams lower-cased again, so stored tokens keep their shape.
    pub fn insert(&mut self, token: String) -> bool {
        self.seen += 1;
        let normalized = normalize(token);
        match self.mode {
            Mode::Bigrams => self.tokens.insert(normalized.to_lowercase()),
            Mode::Words if is_single_word(&normalized) => self.tokens.insert(normalized),
            Mode::Words => {
                let mut added = false;
                for word in words(&normalized) {
                    added |= self.tokens.insert(word.to_string());
                }
                added
            }
        }
    }

    /// Unique tokens so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw tokens offered, duplicates included.
    pub fn seen(&self) -> usize {
        self.seen
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Consume the set into its final order.
    pub fn rank(self) -> RankedList {
        let mut tokens: Vec<String> = self.tokens.into_iter().collect();
        tokens.sort_unstable();
        if self.mode == Mode::Words {
            // Stable, so equal lengths keep the lexicographic order above.
            tokens.sort_by_cached_key(|token| token.chars().count());
        }
        RankedList { tokens }
    }
}

impl Extend<String> for TokenSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

/// Final ordered output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedList {
    tokens: Vec<String>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

fn is_single_word(token: &str) -> bool {
    words(token).next().map(|w| w.len() == token.len()).unwrap_or(false)
}

use std::collections::HashMap;

use crate::oracle::WordOracle;

/// Outcome of validating a candidate word against a rack and the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    CannotForm,
    NotInDictionary,
}

impl Verdict {
    /// User-facing reason string for a rejection
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Valid => "Valid word.",
            Verdict::CannotForm => "Cannot form the word with available tiles.",
            Verdict::NotInDictionary => "Word not found in dictionary.",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Validates candidate words against a player's rack and the dictionary.
///
/// Owns the word-validity cache for one game session: each distinct word
/// hits the oracle at most once, after which the cached boolean is served
/// for the rest of the session. The cache grows monotonically and is never
/// evicted.
pub struct WordValidator<O: WordOracle> {
    oracle: O,
    cache: HashMap<String, bool>,
}

impl<O: WordOracle> WordValidator<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            cache: HashMap::new(),
        }
    }

    /// Check whether the rack's tiles can supply the word's letter multiset
    pub fn can_form(word: &str, rack: &[char]) -> bool {
        let mut available: HashMap<char, usize> = HashMap::new();
        for &tile in rack {
            *available.entry(tile.to_ascii_uppercase()).or_insert(0) += 1;
        }

        let mut needed: HashMap<char, usize> = HashMap::new();
        for ch in word.to_uppercase().chars() {
            *needed.entry(ch).or_insert(0) += 1;
        }

        needed
            .iter()
            .all(|(ch, count)| available.get(ch).copied().unwrap_or(0) >= *count)
    }

    /// Check dictionary membership, consulting the oracle on a cache miss.
    ///
    /// Oracle failure is treated as accept (fail-open) so an API outage
    /// never blocks play; the accept is cached for the session like any
    /// other result.
    pub async fn is_dictionary_word(&mut self, word: &str) -> bool {
        let key = word.to_uppercase();

        if let Some(&cached) = self.cache.get(&key) {
            tracing::debug!(word = %key, valid = cached, "word cache hit");
            return cached;
        }

        let is_valid = match self.oracle.lookup(word).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(word = %key, error = %e, "could not verify word, accepting it");
                true
            }
        };

        self.cache.insert(key, is_valid);
        is_valid
    }

    /// Full validation: tile formability first, then the dictionary.
    ///
    /// Formability is always checked before the (slower, external)
    /// dictionary lookup, so an unformable word never reaches the oracle.
    pub async fn validate(&mut self, word: &str, rack: &[char]) -> Verdict {
        if !Self::can_form(word, rack) {
            return Verdict::CannotForm;
        }

        if !self.is_dictionary_word(word).await {
            return Verdict::NotInDictionary;
        }

        Verdict::Valid
    }
}

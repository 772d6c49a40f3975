//! BIP-39 wordlists: fixed 2048-word dictionaries with a
//! normalization-tolerant reverse lookup.
//!
//! The forward direction is a plain array indexed 0..2047. The reverse
//! direction is keyed by a word's *abbreviation* — its first four
//! NFKC-composed characters — which tolerates rendering and combining-mark
//! differences between otherwise identical words. BIP-39 lists guarantee
//! these abbreviations are unique within a language; the constructor
//! verifies that instead of assuming it.

use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Bip39Error, Result};

/// Number of words in a BIP-39 list.
pub const WORD_COUNT: usize = 1 << 11;

/// Reverse-lookup key length in characters.
const ABBREVIATION_LEN: usize = 4;

const ENGLISH_DATA: &[u8] = include_bytes!("english.txt");
const ENGLISH_CHECKSUM: u32 = 0xc1db_d296;

static ENGLISH: OnceLock<WordList> = OnceLock::new();

/// The embedded English wordlist, built and integrity-checked on first
/// use, then shared read-only for the life of the process.
///
/// # Panics
///
/// Panics if the embedded data fails its integrity check, which can only
/// mean a corrupted build.
pub fn english() -> &'static WordList {
    ENGLISH.get_or_init(|| {
        WordList::from_bytes("english", ENGLISH_DATA, ENGLISH_CHECKSUM)
            .expect("embedded english wordlist failed its integrity check")
    })
}

/// A bidirectional mapping between word indices 0..2047 and the words of
/// one language. Immutable once constructed.
#[derive(Debug)]
pub struct WordList {
    language: String,
    words: Vec<String>,
    indices: HashMap<String, usize>,
}

impl WordList {
    /// Builds a list from newline-delimited UTF-8 `data` after verifying
    /// its CRC32 against `expected_checksum`.
    ///
    /// Fails with [`Bip39Error::WordlistIntegrity`] on a checksum
    /// mismatch, non-UTF-8 data, a row count other than 2048, or two
    /// words sharing an abbreviation. A list is never observable in a
    /// partially built state.
    pub fn from_bytes(language: &str, data: &[u8], expected_checksum: u32) -> Result<Self> {
        let actual = crc32fast::hash(data);
        if actual != expected_checksum {
            return Err(Bip39Error::WordlistIntegrity(format!(
                "{language}: checksum mismatch, expected {expected_checksum:#010x}, got {actual:#010x}"
            )));
        }

        let text = std::str::from_utf8(data).map_err(|err| {
            Bip39Error::WordlistIntegrity(format!("{language}: data is not valid UTF-8: {err}"))
        })?;

        let mut words = Vec::with_capacity(WORD_COUNT);
        let mut indices = HashMap::with_capacity(WORD_COUNT);
        for (index, word) in text.lines().enumerate() {
            if let Some(previous) = indices.insert(abbreviate(word), index) {
                return Err(Bip39Error::WordlistIntegrity(format!(
                    "{language}: words {} and {} share the abbreviation \"{}\"",
                    previous,
                    index,
                    abbreviate(word)
                )));
            }
            words.push(word.to_string());
        }

        if words.len() != WORD_COUNT {
            return Err(Bip39Error::WordlistIntegrity(format!(
                "{language}: expected {WORD_COUNT} words, got {}",
                words.len()
            )));
        }

        log::debug!("loaded {language} wordlist");

        Ok(Self { language: language.to_string(), words, indices })
    }

    /// Language tag this list was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Word at `index`.
    pub fn at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(Bip39Error::WordIndexOutOfRange(index))
    }

    /// Index of `word`, located through its normalized abbreviation.
    pub fn index_of(&self, word: &str) -> Result<usize> {
        self.indices.get(&abbreviate(word)).copied().ok_or_else(|| {
            log::debug!("word \"{}\" not found in {} list", word, self.language);
            Bip39Error::UnknownWord {
                word: word.to_string(),
                language: self.language.clone(),
            }
        })
    }
}

/// First four NFKC-composed characters of `word`, or the whole word when
/// it is shorter than four characters.
fn abbreviate(word: &str) -> String {
    word.nfkc().take(ABBREVIATION_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_boundaries() {
        let list = english();
        assert_eq!(list.language(), "english");
        assert_eq!(list.at(0).unwrap(), "abandon");
        assert_eq!(list.at(2047).unwrap(), "zoo");
    }

    #[test]
    fn at_rejects_out_of_range_index() {
        let err = english().at(2048).unwrap_err();
        assert!(matches!(err, Bip39Error::WordIndexOutOfRange(2048)));
    }

    #[test]
    fn index_of_full_word() {
        let list = english();
        assert_eq!(list.index_of("abandon").unwrap(), 0);
        assert_eq!(list.index_of("zoo").unwrap(), 2047);
    }

    #[test]
    fn index_of_matches_by_abbreviation() {
        // Lookup is keyed on the first four characters, so any spelling
        // that shares them resolves to the same index.
        let list = english();
        assert_eq!(list.index_of("aban").unwrap(), 0);
        assert_eq!(list.index_of("abandoned").unwrap(), 0);
    }

    #[test]
    fn index_of_unknown_word_carries_language() {
        let err = english().index_of("zzzz").unwrap_err();
        match err {
            Bip39Error::UnknownWord { word, language } => {
                assert_eq!(word, "zzzz");
                assert_eq!(language, "english");
            }
            other => panic!("expected UnknownWord, got {other:?}"),
        }
    }

    #[test]
    fn from_bytes_rejects_checksum_mismatch() {
        let err = WordList::from_bytes("english", ENGLISH_DATA, 0xdead_beef).unwrap_err();
        assert!(matches!(err, Bip39Error::WordlistIntegrity(_)));
    }

    #[test]
    fn from_bytes_rejects_wrong_row_count() {
        let data = b"alpha\nbravo\ncharlie\n";
        let err = WordList::from_bytes("test", data, crc32fast::hash(data)).unwrap_err();
        match err {
            Bip39Error::WordlistIntegrity(msg) => assert!(msg.contains("expected 2048")),
            other => panic!("expected WordlistIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn from_bytes_rejects_duplicate_abbreviations() {
        let data = b"abcdone\nabcdtwo\n";
        let err = WordList::from_bytes("test", data, crc32fast::hash(data)).unwrap_err();
        match err {
            Bip39Error::WordlistIntegrity(msg) => assert!(msg.contains("abcd")),
            other => panic!("expected WordlistIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn abbreviate_handles_short_words() {
        assert_eq!(abbreviate("zoo"), "zoo");
        assert_eq!(abbreviate("abandon"), "aban");
    }

    #[test]
    fn abbreviate_composes_before_truncating() {
        // "e" followed by a combining acute composes to a single char.
        assert_eq!(abbreviate("e\u{0301}cole"), "écol");
    }
}

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Bip39Error>;

#[derive(Error, Debug)]
pub enum Bip39Error {
    #[error("entropy bitlen must be one of 128, 160, 192, 224 or 256, got {0}")]
    InvalidEntropyBitlen(usize),

    #[error("mnemonic length must be one of 12, 15, 18, 21 or 24, got {0}")]
    InvalidMnemonicLength(usize),

    #[error("{language} wordlist does not contain word \"{word}\"")]
    UnknownWord { word: String, language: String },

    #[error("word index must be less than 2048, got {0}")]
    WordIndexOutOfRange(usize),

    #[error("invalid mnemonic checksum")]
    InvalidChecksum,

    #[error("wordlist integrity check failed: {0}")]
    WordlistIntegrity(String),

    #[error("random source failure: {0}")]
    Rng(#[from] rand::Error),

    #[error("cannot extract seed: {0}")]
    SeedDerivation(#[source] Box<Bip39Error>),
}

//! Error types.

use core::fmt;

use crate::alphabet::ALPHABET_LEN;

/// Alias for [`core::result::Result`] with the `yid` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Custom alphabet does not contain exactly [`ALPHABET_LEN`] symbols.
    AlphabetLength,

    /// Custom alphabet contains a non-ASCII symbol.
    AlphabetNotAscii,

    /// Custom alphabet repeats a symbol.
    DuplicateSymbol {
        /// The symbol that occurs more than once.
        symbol: char,
    },

    /// Decode was called with an empty string.
    EmptyInput,

    /// Decode input contains a symbol that is not part of the active
    /// alphabet.
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// Character position of the symbol in the input.
        index: usize,
    },

    /// Decoded value does not fit in a `u64`.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlphabetLength => {
                write!(f, "alphabet must contain exactly {} symbols", ALPHABET_LEN)
            }
            Error::AlphabetNotAscii => f.write_str("alphabet symbols must be ASCII"),
            Error::DuplicateSymbol { symbol } => {
                write!(f, "alphabet symbol {:?} occurs more than once", symbol)
            }
            Error::EmptyInput => f.write_str("cannot decode an empty string"),
            Error::InvalidSymbol { symbol, index } => {
                write!(
                    f,
                    "symbol {:?} at position {} is not part of the alphabet",
                    symbol, index
                )
            }
            Error::Overflow => f.write_str("decoded value does not fit in a u64"),
        }
    }
}

impl core::error::Error for Error {}

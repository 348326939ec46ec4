//! Base-62 alphabets and the key-driven shuffle.
//!
//! # Canonical alphabet
//!
//! The canonical symbol order is lowercase `a`-`z`, then digits `0`-`9`,
//! then uppercase `A`-`Z`. A symbol's position is its digit value, so
//! `a` encodes 0 and `Z` encodes 61. This ordering is part of the wire
//! format: two parties exchanging unkeyed IDs must agree on it.
//!
//! # Keyed shuffle
//!
//! [`Alphabet::shuffled`] derives a permuted alphabet from a secret key.
//! The derivation is frozen; every keyed ID ever issued depends on it:
//!
//! 1. Hash the UTF-8 bytes of the key with SHA-256.
//! 2. Assign each position `i` in `0..62` the rank given by the `i`-th
//!    character of the lowercase hex digest, which is the `i`-th 4-bit
//!    nibble of the digest taking the high nibble of each byte first.
//!    Hex characters order by ASCII exactly as nibbles order by value,
//!    since `'0'..='9'` sort before `'a'..='f'`.
//! 3. Stable-sort the (rank, symbol) pairs by rank, descending. Pairs
//!    with equal ranks keep their base-alphabet order.
//! 4. Read off the symbols in sorted order; that sequence is the
//!    permuted alphabet.
//!
//! The result is a pure function of the base alphabet and the key. No
//! process state, clock, or platform detail enters the derivation, so
//! independent implementations agree byte for byte. For example, the
//! key `secret` permutes the canonical alphabet to
//! `IKPUo8AJQfls7DCbcjr6TmyzBMYRdq04iESXw35GLg12OVhnptvaHNWZkxFeu9`.

use core::fmt;

use sha2::{Digest, Sha256};

use crate::errors::{Error, Result};

/// Number of symbols in an alphabet, and therefore the radix of the
/// encoding.
pub const ALPHABET_LEN: usize = 62;

/// An ordered set of 62 distinct ASCII symbols.
///
/// The symbol at position `i` encodes the digit value `i`; the symbol
/// at position 0 doubles as the padding symbol. Use
/// [`Alphabet::STANDARD`] for the canonical order, [`Alphabet::new`]
/// for a custom one, and [`Alphabet::shuffled`] to derive a keyed
/// permutation of either.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
}

impl Alphabet {
    /// The canonical base-62 alphabet: `a`-`z`, `0`-`9`, `A`-`Z`.
    pub const STANDARD: Self = Self {
        symbols: *b"abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    };

    /// Create an alphabet from a custom symbol set.
    ///
    /// `symbols` must contain exactly [`ALPHABET_LEN`] distinct ASCII
    /// characters; the character at position `i` encodes the digit
    /// value `i`. Anything else is rejected:
    ///
    /// ```
    /// use yid::{Alphabet, Error};
    ///
    /// assert!(Alphabet::new("abc").is_err());
    /// assert_eq!(
    ///     Alphabet::new("aacdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
    ///     Err(Error::DuplicateSymbol { symbol: 'a' })
    /// );
    /// ```
    pub fn new(symbols: &str) -> Result<Self> {
        if !symbols.is_ascii() {
            return Err(Error::AlphabetNotAscii);
        }
        if symbols.len() != ALPHABET_LEN {
            return Err(Error::AlphabetLength);
        }

        let mut table = [0u8; ALPHABET_LEN];
        let mut seen = [false; 128];
        for (i, &byte) in symbols.as_bytes().iter().enumerate() {
            if seen[byte as usize] {
                return Err(Error::DuplicateSymbol {
                    symbol: byte as char,
                });
            }
            seen[byte as usize] = true;
            table[i] = byte;
        }

        Ok(Self { symbols: table })
    }

    /// Derive the permuted alphabet for a secret key.
    ///
    /// The same key always produces the same permutation (the
    /// [module docs](self) give the exact derivation), so encoder and
    /// decoder agree without sharing any state beyond the key itself.
    /// An empty key returns the alphabet unchanged.
    ///
    /// ```
    /// use yid::Alphabet;
    ///
    /// let keyed = Alphabet::STANDARD.shuffled("secret");
    /// assert_ne!(keyed, Alphabet::STANDARD);
    /// assert_eq!(keyed, Alphabet::STANDARD.shuffled("secret"));
    /// assert_eq!(Alphabet::STANDARD.shuffled(""), Alphabet::STANDARD);
    /// ```
    #[must_use]
    pub fn shuffled(&self, secure_key: &str) -> Self {
        if secure_key.is_empty() {
            return *self;
        }

        let digest = Sha256::digest(secure_key.as_bytes());

        let mut pairs = [(0u8, 0u8); ALPHABET_LEN];
        for (i, pair) in pairs.iter_mut().enumerate() {
            let byte = digest[i / 2];
            let rank = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            *pair = (rank, self.symbols[i]);
        }

        // stable sort: equal ranks keep their base-alphabet order
        pairs.sort_by(|a, b| b.0.cmp(&a.0));

        let mut symbols = [0u8; ALPHABET_LEN];
        for (symbol, pair) in symbols.iter_mut().zip(pairs.iter()) {
            *symbol = pair.1;
        }
        Self { symbols }
    }

    /// View the symbols in digit-value order.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.symbols).expect("alphabet is ASCII")
    }

    /// Symbol encoding the digit value `value`.
    ///
    /// Callers keep `value` below [`ALPHABET_LEN`].
    pub(crate) fn symbol(&self, value: usize) -> u8 {
        self.symbols[value]
    }

    /// Digit value of `symbol`, or `None` if it is not in the alphabet.
    pub(crate) fn position(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// The symbol for the digit value 0, used for left-padding.
    pub(crate) fn zero_symbol(&self) -> u8 {
        self.symbols[0]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let symbols = alloc::string::String::deserialize(deserializer)?;
        Self::new(&symbols).map_err(serde::de::Error::custom)
    }
}

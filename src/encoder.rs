//! Reusable codec bound to one set of options.

use alloc::string::String;

use crate::alphabet::Alphabet;
use crate::encoding;
use crate::errors::Result;
use crate::options::{Options, Transform};

/// A base-62 codec with a fixed alphabet, padding, and transform.
///
/// Construction derives the working alphabet once, including the keyed
/// shuffle when [`Options::secure_key`] is set; every call after that
/// reuses it. An `Encoder` never mutates after construction, so one
/// instance can be shared across threads and serve any number of
/// concurrent encode and decode calls.
///
/// ```
/// use yid::{Encoder, Options};
///
/// let ids = Encoder::with_options(&Options {
///     secure_key: Some("secret".into()),
///     ..Options::default()
/// });
/// assert_eq!(ids.encode(12345), "UDJ");
/// assert_eq!(ids.decode("UDJ"), Ok(12345));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoder {
    alphabet: Alphabet,
    pad_up: usize,
    transform: Transform,
}

impl Encoder {
    /// Codec over the canonical alphabet with no key, padding, or
    /// transform.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::STANDARD,
            pad_up: 0,
            transform: Transform::None,
        }
    }

    /// Codec over the canonical alphabet with the given options.
    pub fn with_options(options: &Options) -> Self {
        Self::with_alphabet(Alphabet::STANDARD, options)
    }

    /// Codec over a custom base alphabet with the given options.
    ///
    /// When [`Options::secure_key`] is set, the shuffle permutes `base`
    /// rather than the canonical alphabet.
    pub fn with_alphabet(base: Alphabet, options: &Options) -> Self {
        let alphabet = match options.secure_key.as_deref() {
            Some(key) => base.shuffled(key),
            None => base,
        };
        Self {
            alphabet,
            pad_up: options.pad_up,
            transform: options.transform,
        }
    }

    /// Encode `number`, applying the configured transform.
    ///
    /// The transformed string is for display. To store a value for a
    /// later [`decode`][Self::decode], use
    /// [`encode_raw`][Self::encode_raw]; with the canonical alphabet a
    /// case-transformed string decodes to a different number.
    pub fn encode(&self, number: u64) -> String {
        self.transform.apply(self.encode_raw(number))
    }

    /// Encode `number` without the display transform.
    pub fn encode_raw(&self, number: u64) -> String {
        encoding::encode_value(&self.alphabet, number, self.pad_up)
    }

    /// Decode `text` back to its numeric value.
    ///
    /// `text` must be in raw (untransformed) form over this encoder's
    /// working alphabet. Any string over the alphabet decodes to some
    /// value; decoding with a different key than the one that produced
    /// the string silently yields a different number.
    pub fn decode(&self, text: &str) -> Result<u64> {
        encoding::decode_value(&self.alphabet, text)
    }

    /// The working alphabet, after any keyed shuffle.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `number` with the canonical alphabet and no options.
///
/// ```
/// assert_eq!(yid::encode(12345), "dnh");
/// assert_eq!(yid::encode(0), "a");
/// ```
pub fn encode(number: u64) -> String {
    Encoder::new().encode(number)
}

/// Encode `number` with the given options.
///
/// This derives the keyed alphabet on every call. To amortize that over
/// many values, build an [`Encoder`] once and reuse it.
pub fn encode_with(number: u64, options: &Options) -> String {
    Encoder::with_options(options).encode(number)
}

/// Decode `text` with the canonical alphabet and no options.
///
/// ```
/// assert_eq!(yid::decode("dnh"), Ok(12345));
/// ```
pub fn decode(text: &str) -> Result<u64> {
    Encoder::new().decode(text)
}

/// Decode `text` with the given options.
///
/// See [`encode_with`] for the cost of per-call key derivation.
pub fn decode_with(text: &str, options: &Options) -> Result<u64> {
    Encoder::with_options(options).decode(text)
}

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Plain encoding
//!
//! Without options, values encode over the canonical alphabet
//! (`a`-`z`, `0`-`9`, `A`-`Z` in digit-value order):
//!
//! ```
//! assert_eq!(yid::encode(0), "a");
//! assert_eq!(yid::encode(12345), "dnh");
//! assert_eq!(yid::encode(u64::MAX), "vYGrAbgkr8p");
//!
//! assert_eq!(yid::decode("dnh"), Ok(12345));
//! // leading zero symbols are ignored, so padded forms decode too
//! assert_eq!(yid::decode("aaadnh"), Ok(12345));
//! ```
//!
//! ## Keyed encoding
//!
//! A secret key shuffles the alphabet deterministically (see the
//! [`alphabet`] module for the derivation), which makes IDs opaque to
//! anyone without the key. Reuse an [`Encoder`] to derive the shuffle
//! once:
//!
//! ```
//! use yid::{Encoder, Options};
//!
//! let ids = Encoder::with_options(&Options {
//!     secure_key: Some("secret".into()),
//!     ..Options::default()
//! });
//! assert_eq!(ids.encode(12345), "UDJ");
//! assert_eq!(ids.decode("UDJ"), Ok(12345));
//!
//! // a different key gives a different, equally stable encoding
//! let options = Options {
//!     secure_key: Some("my-secret".into()),
//!     ..Options::default()
//! };
//! assert_eq!(yid::encode_with(12345, &options), "hqj");
//! ```
//!
//! ## Padding and case transforms
//!
//! [`Options::pad_up`] left-pads encodings to a minimum width with the
//! alphabet's position-0 symbol; [`Options::transform`] upper- or
//! lowercases the output for display:
//!
//! ```
//! use yid::{Options, Transform};
//!
//! let options = Options {
//!     pad_up: 8,
//!     transform: Transform::Upper,
//!     ..Options::default()
//! };
//! assert_eq!(yid::encode_with(12345, &options), "AAAAADNH");
//! ```
//!
//! Transforms run after encoding and are never reversed before
//! decoding. With the canonical alphabet a case change maps symbols to
//! other valid symbols, so a transformed string decodes to a different
//! value. Treat transformed output as display-only and keep the raw
//! form from [`Encoder::encode_raw`] when the value has to come back.

#[cfg(doctest)]
pub struct ReadmeDoctests;

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod alphabet;
pub mod errors;

mod encoder;
mod encoding;
mod options;

pub use crate::{
    alphabet::{Alphabet, ALPHABET_LEN},
    encoder::{decode, decode_with, encode, encode_with, Encoder},
    encoding::MAX_ENCODED_LEN,
    errors::{Error, Result},
    options::{Options, Transform},
};

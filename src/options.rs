//! Encoding options.

use alloc::string::String;

/// Case transform applied to encoded output.
///
/// Transforms are display sugar: they run after a value is encoded and
/// are never applied before decoding. Decoding expects the raw
/// (untransformed) form, so a transformed string must be mapped back by
/// the caller before decoding. With the canonical alphabet a case
/// transform conflates distinct symbols (`a` and `A` encode different
/// values), which makes round-tripping through [`Upper`][Self::Upper]
/// or [`Lower`][Self::Lower] lossy on purpose.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Transform {
    /// Leave the encoded string unchanged.
    #[default]
    None,
    /// Uppercase every symbol.
    Upper,
    /// Lowercase every symbol.
    Lower,
}

impl Transform {
    /// Apply the transform to an encoded string.
    pub(crate) fn apply(self, mut text: String) -> String {
        match self {
            Transform::None => {}
            Transform::Upper => text.make_ascii_uppercase(),
            Transform::Lower => text.make_ascii_lowercase(),
        }
        text
    }
}

/// Options for one encode/decode context.
///
/// All fields have inert defaults, so partial construction reads well
/// with struct update syntax:
///
/// ```
/// use yid::Options;
///
/// let options = Options {
///     pad_up: 6,
///     secure_key: Some("secret".into()),
///     ..Options::default()
/// };
/// assert_eq!(yid::encode_with(1, &options), "IIIIIK");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Minimum encoded length. Shorter encodings are left-padded with
    /// the alphabet's position-0 symbol; longer ones are never
    /// truncated. Padding is ignored when decoding.
    pub pad_up: usize,

    /// Secret key for the alphabet shuffle. `None` and `Some("")` both
    /// leave the alphabet unshuffled.
    pub secure_key: Option<String>,

    /// Display transform applied by encode calls. Never applied on
    /// decode.
    pub transform: Transform,
}

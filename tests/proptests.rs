//! Property-based tests.

use proptest::prelude::*;
use yid::{Alphabet, Encoder, Options, Transform};

fn options() -> impl Strategy<Value = Options> {
    (
        0usize..=16,
        proptest::option::of(any::<String>()),
        prop_oneof![
            Just(Transform::None),
            Just(Transform::Upper),
            Just(Transform::Lower),
        ],
    )
        .prop_map(|(pad_up, secure_key, transform)| Options {
            pad_up,
            secure_key,
            transform,
        })
}

proptest! {
    #[test]
    fn roundtrip(n in any::<u64>(), options in options()) {
        let encoder = Encoder::with_options(&options);
        prop_assert_eq!(encoder.decode(&encoder.encode_raw(n)), Ok(n));
    }

    #[test]
    fn encode_raw_ignores_transform(n in any::<u64>(), options in options()) {
        let encoder = Encoder::with_options(&options);
        let plain = Encoder::with_options(&Options {
            transform: Transform::None,
            ..options
        });
        prop_assert_eq!(encoder.encode_raw(n), plain.encode_raw(n));
        prop_assert_eq!(plain.encode(n), plain.encode_raw(n));
    }

    #[test]
    fn padding_prepends_zero_symbols(
        n in any::<u64>(),
        pad in 0usize..=16,
        key in proptest::option::of(any::<String>()),
    ) {
        let base = Options { secure_key: key, ..Options::default() };
        let plain = Encoder::with_options(&base).encode_raw(n);

        let encoder = Encoder::with_options(&Options { pad_up: pad, ..base });
        let padded = encoder.encode_raw(n);

        prop_assert_eq!(padded.len(), plain.len().max(pad));
        prop_assert!(padded.ends_with(&plain));
        let zero = encoder.alphabet().as_str().as_bytes()[0] as char;
        prop_assert!(padded[..padded.len() - plain.len()].chars().all(|c| c == zero));
    }

    #[test]
    fn decode_ignores_declared_pad_up(
        n in any::<u64>(),
        encode_pad in 0usize..=16,
        decode_pad in 0usize..=16,
        key in proptest::option::of(any::<String>()),
    ) {
        // decode_pad may exceed the encoded length; decode must not care
        let encoded = Encoder::with_options(&Options {
            pad_up: encode_pad,
            secure_key: key.clone(),
            ..Options::default()
        })
        .encode_raw(n);

        let decoded = yid::decode_with(&encoded, &Options {
            pad_up: decode_pad,
            secure_key: key,
            ..Options::default()
        });
        prop_assert_eq!(decoded, Ok(n));
    }

    #[test]
    fn output_stays_in_working_alphabet(n in any::<u64>(), options in options()) {
        let encoder = Encoder::with_options(&options);
        for symbol in encoder.encode_raw(n).chars() {
            prop_assert!(encoder.alphabet().as_str().contains(symbol));
        }
    }

    #[test]
    fn encoded_length_is_monotone(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(yid::encode(lo).len() <= yid::encode(hi).len());
    }

    #[test]
    fn decode_then_encode_reproduces_input(s in "[a-zA-Z0-9]{1,10}") {
        // 10 digits stay below 62^10, so decoding cannot overflow
        let n = yid::decode(&s);
        prop_assert!(n.is_ok());

        let options = Options { pad_up: s.len(), ..Options::default() };
        prop_assert_eq!(yid::encode_with(n.unwrap(), &options), s);
    }

    #[test]
    fn shuffle_is_a_permutation(key in any::<String>()) {
        let keyed = Alphabet::STANDARD.shuffled(&key);
        let mut have: Vec<u8> = keyed.as_str().bytes().collect();
        have.sort_unstable();
        let mut want: Vec<u8> = Alphabet::STANDARD.as_str().bytes().collect();
        want.sort_unstable();
        prop_assert_eq!(have, want);
    }

    #[test]
    fn shuffle_is_deterministic(key in any::<String>()) {
        prop_assert_eq!(
            Alphabet::STANDARD.shuffled(&key),
            Alphabet::STANDARD.shuffled(&key)
        );
    }
}

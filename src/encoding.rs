//! Base-62 positional conversion.
//!
//! Encoding writes the most significant digit first, like ordinary
//! decimal notation. Decoding is a plain positional evaluation and
//! accepts any count of leading position-0 symbols, so padded and
//! unpadded encodings of the same value decode identically.

use alloc::string::String;

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::errors::{Error, Result};

const RADIX: u64 = ALPHABET_LEN as u64;

/// Longest unpadded encoding of a `u64`: `u64::MAX` takes 11 base-62
/// digits.
pub const MAX_ENCODED_LEN: usize = 11;

/// Convert `number` to base-62 over `alphabet`, left-padding with the
/// position-0 symbol until the output is at least `pad_up` symbols.
pub(crate) fn encode_value(alphabet: &Alphabet, mut number: u64, pad_up: usize) -> String {
    let mut digits = [0u8; MAX_ENCODED_LEN];
    let mut len = 0;

    // emits exactly one digit for number == 0
    loop {
        digits[len] = alphabet.symbol((number % RADIX) as usize);
        len += 1;
        number /= RADIX;
        if number == 0 {
            break;
        }
    }

    let mut out = String::with_capacity(len.max(pad_up));
    for _ in len..pad_up {
        out.push(alphabet.zero_symbol() as char);
    }
    out.extend(digits[..len].iter().rev().map(|&b| b as char));
    out
}

/// Evaluate a base-62 string over `alphabet` back to its numeric value.
pub(crate) fn decode_value(alphabet: &Alphabet, text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut value: u64 = 0;
    for (index, symbol) in text.chars().enumerate() {
        let digit = u8::try_from(symbol)
            .ok()
            .and_then(|byte| alphabet.position(byte))
            .ok_or(Error::InvalidSymbol { symbol, index })?;
        value = value
            .checked_mul(RADIX)
            .and_then(|shifted| shifted.checked_add(digit as u64))
            .ok_or(Error::Overflow)?;
    }

    Ok(value)
}

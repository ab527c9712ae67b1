//! Integer literal parsing with the base prefixes the assembly language
//! accepts: `0x`/`0X` for hexadecimal, a leading `0` for octal, decimal
//! otherwise. An optional sign precedes the prefix.
//!
//! The outcomes distinguish "not a number at all" from "a number followed
//! by junk", because address operands fall back to label parsing only in
//! the former case.

/// Outcome of parsing a token as a signed 32-bit literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntParse {
    Value(i32),
    /// The token does not start with a digit (after an optional sign).
    NotANumber,
    /// The token starts like a number but has trailing non-digits.
    Partial,
    /// A well-formed literal that does not fit the 32-bit signed range.
    OutOfRange,
}

fn digit_value(symbol: u8, radix: u32) -> Option<u32> {
    (symbol as char).to_digit(radix)
}

/// Splits the token into (negative, radix, digits, had_prefix_digit).
///
/// `had_prefix_digit` is set for the bare-`0` octal case, where the
/// prefix itself already denotes a value.
fn split_radix(token: &str) -> Option<(bool, u32, &str, bool)> {
    let bytes = token.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    match bytes.get(pos) {
        Some(b'0') => {
            if matches!(bytes.get(pos + 1), Some(b'x') | Some(b'X'))
                && bytes
                    .get(pos + 2)
                    .map_or(false, |&b| digit_value(b, 16).is_some())
            {
                Some((negative, 16, &token[pos + 2..], false))
            } else {
                // a lone "0" parses as octal zero
                Some((negative, 8, &token[pos + 1..], true))
            }
        }
        Some(b) if b.is_ascii_digit() => Some((negative, 10, &token[pos..], false)),
        _ => None,
    }
}

/// Parses the longest valid digit prefix and reports how far it got, like
/// the usual C string-to-integer conversions.
fn parse_magnitude(digits: &str, radix: u32, prefix_counts: bool) -> (u128, usize, bool) {
    let mut value: u128 = 0;
    let mut consumed = 0;
    let mut overflowed = false;

    for &byte in digits.as_bytes() {
        match digit_value(byte, radix) {
            Some(digit) => {
                value = value
                    .saturating_mul(u128::from(radix))
                    .saturating_add(u128::from(digit));
                if value > u128::from(u64::max_value()) {
                    overflowed = true;
                }
                consumed += 1;
            }
            None => break,
        }
    }

    let any_digits = consumed > 0 || prefix_counts;
    (value, consumed, overflowed && any_digits)
}

/// Parses a token the way `stoi` with base 0 does: full-token consumption
/// is required for a [`IntParse::Value`] outcome.
pub fn parse_i32(token: &str) -> IntParse {
    let (negative, radix, digits, prefix_digit) = match split_radix(token) {
        Some(split) => split,
        None => return IntParse::NotANumber,
    };

    let (magnitude, consumed, overflowed) = parse_magnitude(digits, radix, prefix_digit);

    if consumed == 0 && !prefix_digit {
        return IntParse::NotANumber;
    }

    if consumed < digits.len() {
        return IntParse::Partial;
    }

    if overflowed {
        return IntParse::OutOfRange;
    }

    let signed = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };

    if signed < i128::from(i32::min_value()) || signed > i128::from(i32::max_value()) {
        return IntParse::OutOfRange;
    }

    IntParse::Value(signed as i32)
}

/// Parses a token as an unsigned 64-bit literal. A negative literal wraps
/// modulo 2^64, so `-1` yields `u64::MAX`. Returns `None` for malformed
/// or overlong tokens.
pub fn parse_u64_wrapping(token: &str) -> Option<u64> {
    let (negative, radix, digits, prefix_digit) = split_radix(token)?;

    let (magnitude, consumed, overflowed) = parse_magnitude(digits, radix, prefix_digit);

    if (consumed == 0 && !prefix_digit) || consumed < digits.len() || overflowed {
        return None;
    }

    if magnitude > u128::from(u64::max_value()) {
        return None;
    }

    let magnitude = magnitude as u64;

    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Parses a token as a double literal, requiring the whole token.
pub fn parse_f64(token: &str) -> Option<f64> {
    token.parse().ok()
}

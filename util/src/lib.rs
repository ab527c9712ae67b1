use std::{error::Error, fmt};

pub type Endian = byteorder::LittleEndian;

pub const WORD_WIDTH: u32 = 32;

/// Joins two machine words into a double word, low word first.
#[inline]
pub fn join_words(low: u32, high: u32) -> u64 {
    (u64::from(high) << WORD_WIDTH) | u64::from(low)
}

/// Splits a double word into its low and high machine words.
#[inline]
pub fn split_words(value: u64) -> (u32, u32) {
    (value as u32, (value >> WORD_WIDTH) as u32)
}

/// Interprets the `bit_size` low bits of `bits` as a two's complement
/// signed value.
///
/// Inverse of [`unsigned_bits`]: for any value representable in `bit_size`
/// bits, `signed_value(unsigned_bits(v, n), n) == v`.
#[inline]
pub fn signed_value(bits: u32, bit_size: u32) -> i32 {
    debug_assert!(bit_size > 0 && bit_size <= WORD_WIDTH);

    if bit_size == WORD_WIDTH {
        return bits as i32;
    }

    let shift = WORD_WIDTH - bit_size;
    ((bits << shift) as i32) >> shift
}

/// Produces the `bit_size`-bit two's complement representation of `value`.
///
/// The result occupies the low `bit_size` bits; all higher bits are zero.
#[inline]
pub fn unsigned_bits(value: i32, bit_size: u32) -> u32 {
    debug_assert!(bit_size > 0 && bit_size <= WORD_WIDTH);

    if bit_size == WORD_WIDTH {
        return value as u32;
    }

    (value as u32) & ((1u32 << bit_size) - 1)
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to parse \"{}\" as {}.",
            &self.value, &self.enum_name
        )
    }
}

impl Error for ParseEnumError {}

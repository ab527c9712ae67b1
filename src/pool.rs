//! Type tags of the constant pool.
//!
//! Every constant in the constants segment starts with a one-word type tag
//! so the disassembler can recover the typed value. The tag is followed by
//! one data word (`uint32`, `char`), two data words (`uint64`, `double`),
//! or one word per character plus a zero terminator (`string`).

use std::fmt;
use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};
use util::ParseEnumError;

use crate::Word;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, FromPrimitive, ToPrimitive)]
pub enum Type {
    UINT32 = 0,
    UINT64 = 1,
    DOUBLE = 2,
    CHAR = 3,
    STRING = 4,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::UINT32 => "uint32",
            Type::UINT64 => "uint64",
            Type::DOUBLE => "double",
            Type::CHAR => "char",
            Type::STRING => "string",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Type, ParseEnumError> {
        match s {
            "uint32" => Ok(Type::UINT32),
            "uint64" => Ok(Type::UINT64),
            "double" => Ok(Type::DOUBLE),
            "char" => Ok(Type::CHAR),
            "string" => Ok(Type::STRING),
            _ => Err(ParseEnumError {
                value: s.to_string(),
                enum_name: "pool::Type",
            }),
        }
    }
}

/// Word terminating a string constant.
pub const STRING_END: Word = 0;

/// Significant digits used when printing double constants. Past this,
/// decimal round trips of binary64 values start to wobble.
pub const DOUBLE_PRECISION: usize = 15;

use std::path::PathBuf;

use thiserror::Error;

use karma::pool;
use karma::Word;

/// Errors of the compilation pipeline. Positional variants carry a
/// human-readable position that includes the include chain.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to open \"{path}\": {source}")]
    FailedToOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("reading \"{path}\" failed: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("include directive without a filename\n{pos}")]
    IncludeNoFilename { pos: String },

    #[error("empty label\n{pos}")]
    EmptyLabel { pos: String },

    #[error(
        "label \"{label}\" is placed right after another label \"{prev_label}\" \
         (defined {prev_pos})\n{pos}"
    )]
    ConsecutiveLabels {
        label: String,
        pos: String,
        prev_label: String,
        prev_pos: String,
    },

    #[error(
        "label \"{label}\" (defined {label_pos}) is placed before an entrypoint \
         directive and has nothing to label\n{pos}"
    )]
    LabelBeforeEntrypoint {
        label: String,
        label_pos: String,
        pos: String,
    },

    #[error("encountered a second entrypoint (the first was {prev_pos})\n{pos}")]
    SecondEntrypoint { pos: String, prev_pos: String },

    #[error("entrypoint directive without an address\n{pos}")]
    EntrypointWithoutAddress { pos: String },

    #[error("label \"{label}\" redefined (previous definition {prev_pos})\n{pos}")]
    LabelRedefinition {
        label: String,
        pos: String,
        prev_pos: String,
    },

    #[error("file ends with a label \"{label}\" that labels nothing\n{pos}")]
    FileEndsWithLabel { label: String, pos: String },

    #[error("label \"{label}\" starts with a digit\n{pos}")]
    LabelStartsWithDigit { label: String, pos: String },

    #[error("label \"{label}\" contains a character {symbol:?} that is not allowed\n{pos}")]
    InvalidLabelCharacter {
        symbol: char,
        label: String,
        pos: String,
    },

    #[error("label \"{label}\" is used but never defined\n{pos}")]
    UndefinedLabel { label: String, pos: String },

    #[error("unknown command \"{token}\"\n{pos}")]
    UnknownCommand { token: String, pos: String },

    #[error("unknown register \"{token}\"\n{pos}")]
    UnknownRegister { token: String, pos: String },

    #[error("address \"{token}\" is negative\n{pos}")]
    AddressNegative { token: String, pos: String },

    #[error("address \"{token}\" is outside of memory\n{pos}")]
    AddressOutOfMemory { token: String, pos: String },

    #[error("immediate operand \"{token}\" is not a number\n{pos}")]
    ImmediateNotANumber { token: String, pos: String },

    #[error("immediate operand \"{token}\" is less than the minimum {min}\n{pos}")]
    ImmediateLessThanMin {
        min: i32,
        token: String,
        pos: String,
    },

    #[error("immediate operand \"{token}\" is more than the maximum {max}\n{pos}")]
    ImmediateMoreThanMax {
        max: i32,
        token: String,
        pos: String,
    },

    #[error("immediate operand \"{token}\" is out of range\n{pos}")]
    ImmediateOutOfRange { token: String, pos: String },

    #[error("a register-memory command requires a register operand\n{pos}")]
    RmNoRegister { pos: String },

    #[error("a register-memory command requires an address operand\n{pos}")]
    RmNoAddress { pos: String },

    #[error("a register-register command requires a receiver register\n{pos}")]
    RrNoReceiver { pos: String },

    #[error("a register-register command requires a source register\n{pos}")]
    RrNoSource { pos: String },

    #[error("a register-register command requires a modifier operand\n{pos}")]
    RrNoModifier { pos: String },

    #[error("a register-immediate command requires a register operand\n{pos}")]
    RiNoRegister { pos: String },

    #[error("a register-immediate command requires an immediate operand\n{pos}")]
    RiNoImmediate { pos: String },

    #[error("a jump command requires an address operand\n{pos}")]
    JNoAddress { pos: String },

    #[error("extra token \"{token}\" after an entrypoint directive\n{pos}")]
    ExtraAfterEntrypoint { token: String, pos: String },

    #[error("extra token \"{token}\" after a command\n{pos}")]
    ExtraAfterCommand { token: String, pos: String },

    #[error("extra token \"{token}\" after a {value_type} constant\n{pos}")]
    ExtraAfterConstant {
        value_type: pool::Type,
        token: String,
        pos: String,
    },

    #[error("{value_type} constant without a value\n{pos}")]
    EmptyConstValue { value_type: pool::Type, pos: String },

    #[error("invalid {value_type} constant value {token:?}\n{pos}")]
    InvalidConstValue {
        value_type: pool::Type,
        token: String,
        pos: String,
    },

    #[error("char constant {token:?} is too small to be quoted\n{pos}")]
    CharTooSmallForQuotes { token: String, pos: String },

    #[error("char constant {token:?} does not start with a quote\n{pos}")]
    CharNoStartQuote { token: String, pos: String },

    #[error("char constant {token:?} does not end with a quote\n{pos}")]
    CharNoEndQuote { token: String, pos: String },

    #[error("string constant {token:?} is too small to be quoted\n{pos}")]
    StringTooSmallForQuotes { token: String, pos: String },

    #[error("string constant {token:?} does not start with a quote\n{pos}")]
    StringNoStartQuote { token: String, pos: String },

    #[error("string constant {token:?} does not end with a quote\n{pos}")]
    StringNoEndQuote { token: String, pos: String },

    #[error("the program has no entrypoint")]
    NoEntrypoint,
}

/// Errors of binary-to-text recovery.
#[derive(Debug, Error)]
pub enum DisassembleError {
    #[error("unknown constant type tag {0}")]
    UnknownConstantType(Word),

    #[error("the constants segment ends in the middle of a {value_type} constant")]
    ConstantNoValue { value_type: pool::Type },

    #[error("a string constant has no zero terminator before the end of the segment")]
    NoTrailingZeroInString,

    #[error("unknown command code {0}")]
    UnknownCommand(Word),
}

/// Umbrella error of the public entry points that touch both the
/// compiler and the executable container.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Disassemble(#[from] DisassembleError),

    #[error(transparent)]
    ExecFile(#[from] kexfile::ExecFileError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

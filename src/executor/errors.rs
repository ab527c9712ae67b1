use thiserror::Error;

use crate::instructions::{Immediate, Opcode};
use crate::{Address, Double, Register, TwoWords, Word};

/// Fatal errors of a single run. The dispatch loop stops at the first one.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("instruction pointer {0} is outside of memory")]
    ExecPointerOutOfMemory(Address),

    #[error("stack pointer {0} is outside of memory")]
    StackPointerOutOfMemory(Address),

    #[error("stack overflow: stack is bounded to {max_size} words")]
    StackOverflow { max_size: usize },

    #[error("register r{0} does not exist")]
    InvalidRegister(Register),

    #[error("register r{0} is blocked by the execution config")]
    RegisterIsBlocked(Register),

    #[error("address {0} is outside of memory")]
    AddressOutOfMemory(Address),

    #[error("address {0} is inside the code segment, which is blocked by the execution config")]
    CodeSegmentBlocked(Address),

    #[error(
        "address {0} is inside the constants segment, which is blocked by the execution config"
    )]
    ConstantsSegmentBlocked(Address),

    #[error("unknown command code {0}")]
    UnknownCommand(Word),

    #[error("unknown syscall code {0}")]
    UnknownSyscallCode(Immediate),

    #[error("division by zero")]
    DivisionByZero,

    #[error("a quotient of {dividend} / {divisor} does not fit into a single register")]
    QuotientOverflow { dividend: TwoWords, divisor: TwoWords },

    #[error("the right operand {rhs} of {code} is not a valid bit count")]
    BitwiseRhsTooBig { rhs: Word, code: Opcode },

    #[error("a floored value of {0} does not fit into a single register")]
    DtoiOverflow(Double),

    #[error("the value {0} is not a single byte and cannot be printed as a character")]
    InvalidPutCharValue(Word),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! Helpers shared by the per-format operations: register pairs, checked
//! division, the comparison flags write, and the stack and call protocols.

use std::cmp::Ordering;

use crate::flags::Flags;
use crate::instructions::Opcode;
use crate::{constants, Address, Register, TwoWords, Word};

use super::errors::ExecutionError;
use super::storage::{Storage, INTERNAL, USER};

type Result<T> = std::result::Result<T, ExecutionError>;

/// Reads the register pair `(low, low + 1)` as one double word.
pub(super) fn two_registers(storage: &Storage, low: Register) -> Result<TwoWords> {
    Ok(util::join_words(
        storage.reg(low, USER)?,
        storage.reg(low + 1, USER)?,
    ))
}

/// Writes a double word across the register pair `(low, low + 1)`.
pub(super) fn put_two_registers(
    storage: &mut Storage,
    value: TwoWords,
    low: Register,
) -> Result<()> {
    let (low_word, high_word) = util::split_words(value);

    storage.set_reg(low, low_word, USER)?;
    storage.set_reg(low + 1, high_word, USER)
}

/// Shift and mask operands must denote a bit position inside a word.
pub(super) fn check_bitwise_rhs(rhs: Word, code: Opcode) -> Result<()> {
    if rhs >= constants::WORD_WIDTH {
        return Err(ExecutionError::BitwiseRhsTooBig { rhs, code });
    }

    Ok(())
}

/// Divides the double-word `dividend` by `divisor`, writing the quotient
/// to `recv` and the remainder to `recv + 1`.
pub(super) fn divide(
    storage: &mut Storage,
    dividend: TwoWords,
    divisor: TwoWords,
    recv: Register,
) -> Result<()> {
    if divisor == 0 {
        return Err(ExecutionError::DivisionByZero);
    }

    let quotient = dividend / divisor;

    if quotient > TwoWords::from(constants::MAX_WORD) {
        return Err(ExecutionError::QuotientOverflow { dividend, divisor });
    }

    storage.set_reg(recv, quotient as Word, USER)?;
    storage.set_reg(recv + 1, (dividend % divisor) as Word, USER)
}

/// Stores the three-way comparison of `lhs` and `rhs` into the flags.
/// Unordered double operands store the equal pattern.
pub(super) fn write_comparison<T: PartialOrd>(storage: &mut Storage, lhs: T, rhs: T) {
    let ordering = lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal);
    storage.set_flags(Flags::comparison(ordering));
}

/// Transfers control to `dst` if any of the selected flag bits is set.
pub(super) fn jump(storage: &mut Storage, flag: Flags, dst: Address) -> Result<()> {
    if storage.flags().intersects(flag) {
        storage.set_reg(constants::INSTRUCTION_REGISTER, dst, INTERNAL)?;
    }

    Ok(())
}

pub(super) fn push(storage: &mut Storage, value: Word) -> Result<()> {
    storage.check_push_allowed()?;

    let stack = storage.reg(constants::STACK_REGISTER, INTERNAL)?;
    storage.set_mem(stack, value, USER)?;
    storage.set_reg(constants::STACK_REGISTER, stack.wrapping_sub(1), INTERNAL)
}

/// Pops into `recv`, adding `modifier` to the popped value. The call and
/// return protocols pop into utility registers and pass `internal`.
pub(super) fn pop(
    storage: &mut Storage,
    recv: Register,
    modifier: Word,
    internal: bool,
) -> Result<()> {
    let stack = storage
        .reg(constants::STACK_REGISTER, INTERNAL)?
        .wrapping_add(1);
    storage.set_reg(constants::STACK_REGISTER, stack, INTERNAL)?;

    let value = storage.mem(stack, USER)?.wrapping_add(modifier);
    storage.set_reg(recv, value, internal)
}

/// The call protocol: push the fall-through address and the caller's
/// frame register, seat the frame register at the current stack pointer,
/// and transfer control to `callee`. Returns the fall-through address.
pub(super) fn call(storage: &mut Storage, callee: Address) -> Result<Address> {
    let return_address = storage.reg(constants::INSTRUCTION_REGISTER, INTERNAL)?;

    push(storage, return_address)?;

    let frame = storage.reg(constants::CALL_FRAME_REGISTER, INTERNAL)?;
    push(storage, frame)?;

    let stack = storage.reg(constants::STACK_REGISTER, INTERNAL)?;
    storage.set_reg(constants::CALL_FRAME_REGISTER, stack, INTERNAL)?;
    storage.set_reg(constants::INSTRUCTION_REGISTER, callee, INTERNAL)?;

    Ok(return_address)
}

/// The return protocol. The frame register is restored twice: once to
/// unwind past the callee's locals and saved frame, and again after the
/// caller's arguments have been dropped from the stack.
pub(super) fn ret(storage: &mut Storage) -> Result<()> {
    let frame = storage.reg(constants::CALL_FRAME_REGISTER, INTERNAL)?;
    storage.set_reg(constants::STACK_REGISTER, frame, INTERNAL)?;

    pop(storage, constants::CALL_FRAME_REGISTER, 0, INTERNAL)?;
    pop(storage, constants::INSTRUCTION_REGISTER, 0, INTERNAL)?;

    let frame = storage.reg(constants::CALL_FRAME_REGISTER, INTERNAL)?;
    storage.set_reg(constants::STACK_REGISTER, frame, INTERNAL)?;

    pop(storage, constants::CALL_FRAME_REGISTER, 0, INTERNAL)
}

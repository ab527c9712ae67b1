//! RR-format operations. The right-hand operand is always
//! `Reg[src] + modifier` with the modifier sign-extended.

use crate::instructions::{Opcode, RrArgs};
use crate::{constants, Address, Double, TwoWords, Word};

use super::common;
use super::errors::ExecutionError;
use super::storage::{Storage, USER};

type Result<T = ()> = std::result::Result<T, ExecutionError>;

fn lhs_word(storage: &Storage, args: RrArgs) -> Result<Word> {
    storage.reg(args.recv, USER)
}

fn rhs_word(storage: &Storage, args: RrArgs) -> Result<Word> {
    Ok(storage
        .reg(args.src, USER)?
        .wrapping_add(args.modifier as Word))
}

fn lhs_double(storage: &Storage, args: RrArgs) -> Result<Double> {
    Ok(Double::from_bits(common::two_registers(storage, args.recv)?))
}

fn rhs_double(storage: &Storage, args: RrArgs) -> Result<Double> {
    Ok(Double::from_bits(common::two_registers(storage, args.src)?))
}

pub(super) fn add(storage: &mut Storage, args: RrArgs) -> Result {
    let result = lhs_word(storage, args)?.wrapping_add(rhs_word(storage, args)?);
    storage.set_reg(args.recv, result, USER)
}

pub(super) fn sub(storage: &mut Storage, args: RrArgs) -> Result {
    let result = lhs_word(storage, args)?.wrapping_sub(rhs_word(storage, args)?);
    storage.set_reg(args.recv, result, USER)
}

/// The full 64-bit product spans the receiver pair.
pub(super) fn mul(storage: &mut Storage, args: RrArgs) -> Result {
    let product =
        TwoWords::from(lhs_word(storage, args)?) * TwoWords::from(rhs_word(storage, args)?);
    common::put_two_registers(storage, product, args.recv)
}

/// The dividend is read from the receiver pair; the quotient lands in the
/// receiver and the remainder in the register above it.
pub(super) fn div(storage: &mut Storage, args: RrArgs) -> Result {
    let dividend = common::two_registers(storage, args.recv)?;
    let divisor = TwoWords::from(rhs_word(storage, args)?);
    common::divide(storage, dividend, divisor, args.recv)
}

fn checked_bitwise<F>(storage: &mut Storage, code: Opcode, args: RrArgs, op: F) -> Result
where
    F: FnOnce(Word, Word) -> Word,
{
    let rhs = rhs_word(storage, args)?;
    common::check_bitwise_rhs(rhs, code)?;

    let result = op(lhs_word(storage, args)?, rhs);
    storage.set_reg(args.recv, result, USER)
}

pub(super) fn shl(storage: &mut Storage, args: RrArgs) -> Result {
    checked_bitwise(storage, Opcode::SHL, args, |lhs, rhs| lhs << rhs)
}

pub(super) fn shr(storage: &mut Storage, args: RrArgs) -> Result {
    checked_bitwise(storage, Opcode::SHR, args, |lhs, rhs| lhs >> rhs)
}

pub(super) fn and(storage: &mut Storage, args: RrArgs) -> Result {
    checked_bitwise(storage, Opcode::AND, args, |lhs, rhs| lhs & rhs)
}

pub(super) fn or(storage: &mut Storage, args: RrArgs) -> Result {
    checked_bitwise(storage, Opcode::OR, args, |lhs, rhs| lhs | rhs)
}

pub(super) fn xor(storage: &mut Storage, args: RrArgs) -> Result {
    checked_bitwise(storage, Opcode::XOR, args, |lhs, rhs| lhs ^ rhs)
}

pub(super) fn itod(storage: &mut Storage, args: RrArgs) -> Result {
    let value = Double::from(rhs_word(storage, args)?);
    common::put_two_registers(storage, value.to_bits(), args.recv)
}

pub(super) fn dtoi(storage: &mut Storage, args: RrArgs) -> Result {
    let value = rhs_double(storage, args)?;
    let floored = value.floor();

    if floored < 0.0 || floored >= Double::from(constants::MAX_WORD) {
        return Err(ExecutionError::DtoiOverflow(value));
    }

    storage.set_reg(args.recv, floored as Word, USER)
}

fn double_arith<F>(storage: &mut Storage, args: RrArgs, op: F) -> Result
where
    F: FnOnce(Double, Double) -> Double,
{
    let result = op(lhs_double(storage, args)?, rhs_double(storage, args)?);
    common::put_two_registers(storage, result.to_bits(), args.recv)
}

pub(super) fn addd(storage: &mut Storage, args: RrArgs) -> Result {
    double_arith(storage, args, |lhs, rhs| lhs + rhs)
}

pub(super) fn subd(storage: &mut Storage, args: RrArgs) -> Result {
    double_arith(storage, args, |lhs, rhs| lhs - rhs)
}

pub(super) fn muld(storage: &mut Storage, args: RrArgs) -> Result {
    double_arith(storage, args, |lhs, rhs| lhs * rhs)
}

pub(super) fn divd(storage: &mut Storage, args: RrArgs) -> Result {
    if rhs_double(storage, args)? == 0.0 {
        return Err(ExecutionError::DivisionByZero);
    }

    double_arith(storage, args, |lhs, rhs| lhs / rhs)
}

pub(super) fn cmp(storage: &mut Storage, args: RrArgs) -> Result {
    let lhs = lhs_word(storage, args)?;
    let rhs = rhs_word(storage, args)?;
    common::write_comparison(storage, lhs, rhs);
    Ok(())
}

pub(super) fn cmpd(storage: &mut Storage, args: RrArgs) -> Result {
    let lhs = lhs_double(storage, args)?;
    let rhs = rhs_double(storage, args)?;
    common::write_comparison(storage, lhs, rhs);
    Ok(())
}

pub(super) fn mov(storage: &mut Storage, args: RrArgs) -> Result {
    let value = rhs_word(storage, args)?;
    storage.set_reg(args.recv, value, USER)
}

pub(super) fn loadr(storage: &mut Storage, args: RrArgs) -> Result {
    let value = storage.mem(rhs_word(storage, args)?, USER)?;
    storage.set_reg(args.recv, value, USER)
}

pub(super) fn loadr2(storage: &mut Storage, args: RrArgs) -> Result {
    let address: Address = rhs_word(storage, args)?;

    let low = storage.mem(address, USER)?;
    let high = storage.mem(address + 1, USER)?;

    storage.set_reg(args.recv, low, USER)?;
    storage.set_reg(args.recv + 1, high, USER)
}

pub(super) fn storer(storage: &mut Storage, args: RrArgs) -> Result {
    let address = rhs_word(storage, args)?;
    let value = storage.reg(args.recv, USER)?;
    storage.set_mem(address, value, USER)
}

pub(super) fn storer2(storage: &mut Storage, args: RrArgs) -> Result {
    let address: Address = rhs_word(storage, args)?;

    let low = storage.reg(args.recv, USER)?;
    let high = storage.reg(args.recv + 1, USER)?;

    storage.set_mem(address, low, USER)?;
    storage.set_mem(address + 1, high, USER)
}

/// Deposits the fall-through address into the receiver after the call
/// protocol has run.
pub(super) fn call(storage: &mut Storage, args: RrArgs) -> Result {
    let callee = rhs_word(storage, args)?;
    let return_address = common::call(storage, callee)?;
    storage.set_reg(args.recv, return_address, USER)
}

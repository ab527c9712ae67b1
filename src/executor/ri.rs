//! RI-format operations, including the syscall table. Syscalls read from
//! and write to the I/O handles of the current run.

use std::io::{BufRead, Write};

use num_traits::FromPrimitive;

use crate::instructions::{Opcode, RiArgs, Syscall};
use crate::{Double, TwoWords, Word};

use super::common;
use super::errors::ExecutionError;
use super::storage::{Storage, USER};
use super::{Io, ReturnCode};

type Result<T = ()> = std::result::Result<T, ExecutionError>;

fn imm_word(args: RiArgs) -> Word {
    args.imm as Word
}

/// Suspends the executor until the process receives an external
/// termination signal; no further progress is made.
pub(super) fn halt() -> Result<Option<ReturnCode>> {
    loop {
        std::thread::park();
    }
}

pub(super) fn syscall(
    storage: &mut Storage,
    io: &mut Io,
    args: RiArgs,
) -> Result<Option<ReturnCode>> {
    let code =
        Syscall::from_i32(args.imm).ok_or(ExecutionError::UnknownSyscallCode(args.imm))?;

    match code {
        Syscall::EXIT => {
            return Ok(Some(storage.reg(args.reg, USER)?));
        }

        Syscall::SCANINT => {
            let token = read_token(io.input)?;
            let value: i32 = token
                .parse()
                .map_err(|_| ExecutionError::InvalidInput(token))?;

            storage.set_reg(args.reg, value as Word, USER)?;
        }

        Syscall::SCANDOUBLE => {
            let token = read_token(io.input)?;
            let value: Double = token
                .parse()
                .map_err(|_| ExecutionError::InvalidInput(token))?;

            common::put_two_registers(storage, value.to_bits(), args.reg)?;
        }

        Syscall::PRINTINT => {
            let value = storage.reg(args.reg, USER)? as i32;
            write!(io.output, "{}", value)?;
            io.output.flush()?;
        }

        Syscall::PRINTDOUBLE => {
            let value = Double::from_bits(common::two_registers(storage, args.reg)?);
            write!(io.output, "{}", value)?;
            io.output.flush()?;
        }

        Syscall::GETCHAR => {
            let mut byte = [0u8; 1];
            io.input.read_exact(&mut byte)?;

            storage.set_reg(args.reg, Word::from(byte[0]), USER)?;
        }

        Syscall::PUTCHAR => {
            let value = storage.reg(args.reg, USER)?;

            if value > Word::from(u8::max_value()) {
                return Err(ExecutionError::InvalidPutCharValue(value));
            }

            io.output.write_all(&[value as u8])?;
            io.output.flush()?;
        }
    }

    Ok(None)
}

/// Skips leading whitespace, then reads one whitespace-delimited token.
/// The terminating whitespace byte stays in the input.
fn read_token(input: &mut dyn BufRead) -> Result<String> {
    let mut token = Vec::new();

    loop {
        let (done, consumed) = {
            let buffer = input.fill_buf()?;
            if buffer.is_empty() {
                break;
            }

            let mut consumed = 0;
            let mut done = false;

            for &byte in buffer {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                consumed += 1;
            }

            (done, consumed)
        };

        input.consume(consumed);

        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(ExecutionError::InvalidInput(
            "unexpected end of input".to_string(),
        ));
    }

    String::from_utf8(token).map_err(|err| ExecutionError::InvalidInput(err.to_string()))
}

pub(super) fn addi(storage: &mut Storage, args: RiArgs) -> Result {
    let result = storage.reg(args.reg, USER)?.wrapping_add(imm_word(args));
    storage.set_reg(args.reg, result, USER)
}

pub(super) fn subi(storage: &mut Storage, args: RiArgs) -> Result {
    let result = storage.reg(args.reg, USER)?.wrapping_sub(imm_word(args));
    storage.set_reg(args.reg, result, USER)
}

pub(super) fn muli(storage: &mut Storage, args: RiArgs) -> Result {
    let product =
        TwoWords::from(storage.reg(args.reg, USER)?) * TwoWords::from(imm_word(args));
    common::put_two_registers(storage, product, args.reg)
}

pub(super) fn divi(storage: &mut Storage, args: RiArgs) -> Result {
    let dividend = common::two_registers(storage, args.reg)?;
    common::divide(storage, dividend, TwoWords::from(imm_word(args)), args.reg)
}

pub(super) fn not(storage: &mut Storage, args: RiArgs) -> Result {
    let result = !storage.reg(args.reg, USER)?;
    storage.set_reg(args.reg, result, USER)
}

fn checked_bitwise<F>(storage: &mut Storage, code: Opcode, args: RiArgs, op: F) -> Result
where
    F: FnOnce(Word, Word) -> Word,
{
    let rhs = imm_word(args);
    common::check_bitwise_rhs(rhs, code)?;

    let result = op(storage.reg(args.reg, USER)?, rhs);
    storage.set_reg(args.reg, result, USER)
}

pub(super) fn shli(storage: &mut Storage, args: RiArgs) -> Result {
    checked_bitwise(storage, Opcode::SHLI, args, |lhs, rhs| lhs << rhs)
}

pub(super) fn shri(storage: &mut Storage, args: RiArgs) -> Result {
    checked_bitwise(storage, Opcode::SHRI, args, |lhs, rhs| lhs >> rhs)
}

pub(super) fn andi(storage: &mut Storage, args: RiArgs) -> Result {
    checked_bitwise(storage, Opcode::ANDI, args, |lhs, rhs| lhs & rhs)
}

pub(super) fn ori(storage: &mut Storage, args: RiArgs) -> Result {
    checked_bitwise(storage, Opcode::ORI, args, |lhs, rhs| lhs | rhs)
}

pub(super) fn xori(storage: &mut Storage, args: RiArgs) -> Result {
    checked_bitwise(storage, Opcode::XORI, args, |lhs, rhs| lhs ^ rhs)
}

pub(super) fn cmpi(storage: &mut Storage, args: RiArgs) -> Result {
    let lhs = storage.reg(args.reg, USER)?;
    common::write_comparison(storage, lhs, imm_word(args));
    Ok(())
}

pub(super) fn push(storage: &mut Storage, args: RiArgs) -> Result {
    let value = storage.reg(args.reg, USER)?.wrapping_add(imm_word(args));
    common::push(storage, value)
}

pub(super) fn pop(storage: &mut Storage, args: RiArgs) -> Result {
    common::pop(storage, args.reg, imm_word(args), USER)
}

pub(super) fn lc(storage: &mut Storage, args: RiArgs) -> Result {
    storage.set_reg(args.reg, imm_word(args), USER)
}

//! J-format operations: control transfer.

use crate::constants;
use crate::flags::Flags;
use crate::instructions::JArgs;

use super::common;
use super::errors::ExecutionError;
use super::storage::{Storage, INTERNAL};

type Result = std::result::Result<(), ExecutionError>;

pub(super) fn jmp(storage: &mut Storage, args: JArgs) -> Result {
    storage.set_reg(constants::INSTRUCTION_REGISTER, args.addr, INTERNAL)
}

pub(super) fn jne(storage: &mut Storage, args: JArgs) -> Result {
    common::jump(storage, Flags::NOT_EQUAL, args.addr)
}

pub(super) fn jeq(storage: &mut Storage, args: JArgs) -> Result {
    common::jump(storage, Flags::EQUAL, args.addr)
}

pub(super) fn jle(storage: &mut Storage, args: JArgs) -> Result {
    common::jump(storage, Flags::LESS_OR_EQUAL, args.addr)
}

pub(super) fn jl(storage: &mut Storage, args: JArgs) -> Result {
    common::jump(storage, Flags::LESS, args.addr)
}

pub(super) fn jge(storage: &mut Storage, args: JArgs) -> Result {
    common::jump(storage, Flags::GREATER_OR_EQUAL, args.addr)
}

pub(super) fn jg(storage: &mut Storage, args: JArgs) -> Result {
    common::jump(storage, Flags::GREATER, args.addr)
}

pub(super) fn calli(storage: &mut Storage, args: JArgs) -> Result {
    common::call(storage, args.addr)?;
    Ok(())
}

pub(super) fn ret(storage: &mut Storage) -> Result {
    common::ret(storage)
}

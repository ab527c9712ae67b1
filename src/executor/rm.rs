//! RM-format operations: register versus absolute memory address.

use crate::instructions::RmArgs;

use super::errors::ExecutionError;
use super::storage::{Storage, USER};

type Result = std::result::Result<(), ExecutionError>;

pub(super) fn la(storage: &mut Storage, args: RmArgs) -> Result {
    storage.set_reg(args.reg, args.addr, USER)
}

pub(super) fn load(storage: &mut Storage, args: RmArgs) -> Result {
    let value = storage.mem(args.addr, USER)?;
    storage.set_reg(args.reg, value, USER)
}

pub(super) fn load2(storage: &mut Storage, args: RmArgs) -> Result {
    let low = storage.mem(args.addr, USER)?;
    let high = storage.mem(args.addr + 1, USER)?;

    storage.set_reg(args.reg, low, USER)?;
    storage.set_reg(args.reg + 1, high, USER)
}

pub(super) fn store(storage: &mut Storage, args: RmArgs) -> Result {
    let value = storage.reg(args.reg, USER)?;
    storage.set_mem(args.addr, value, USER)
}

pub(super) fn store2(storage: &mut Storage, args: RmArgs) -> Result {
    let low = storage.reg(args.reg, USER)?;
    let high = storage.reg(args.reg + 1, USER)?;

    storage.set_mem(args.addr, low, USER)?;
    storage.set_mem(args.addr + 1, high, USER)
}

use std::collections::HashSet;
use std::ops::{BitAnd, BitAndAssign};

use crate::{constants, Address, Register};

/// The three registers with architectural roles: call frame, stack
/// pointer and instruction pointer.
pub const UTILITY_REGISTERS: [Register; 3] = [
    constants::CALL_FRAME_REGISTER,
    constants::STACK_REGISTER,
    constants::INSTRUCTION_REGISTER,
];

/// A sandbox policy enforced on every user-level register and memory
/// access.
///
/// An executor carries a base config; each run may supply an additional
/// one. The effective policy is their meet (`&`): blocked register sets
/// are unioned, segment blocks are or-ed, and of two stack bounds the
/// smaller wins.
#[derive(Clone, Debug, Default)]
pub struct Config {
    blocked_registers: HashSet<Register>,
    block_code_segment: bool,
    block_constants_segment: bool,
    max_stack_size: Option<usize>,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Blocks the utility registers, both segments, and leaves the stack
    /// bound untouched.
    pub fn strict() -> Config {
        Config::new()
            .block_utility_registers()
            .block_code_segment()
            .block_constants_segment()
    }

    pub fn block_registers<I>(mut self, registers: I) -> Config
    where
        I: IntoIterator<Item = Register>,
    {
        self.blocked_registers.extend(registers);
        self
    }

    pub fn block_utility_registers(self) -> Config {
        self.block_registers(UTILITY_REGISTERS.iter().cloned())
    }

    pub fn block_code_segment(mut self) -> Config {
        self.block_code_segment = true;
        self
    }

    pub fn block_constants_segment(mut self) -> Config {
        self.block_constants_segment = true;
        self
    }

    /// Bounds the stack to at most `size` words. A bound of the full
    /// memory or more means an unbounded stack.
    pub fn bound_stack(mut self, size: usize) -> Config {
        self.max_stack_size = if size >= constants::MEMORY_SIZE {
            None
        } else {
            Some(size)
        };
        self
    }

    pub(super) fn register_is_blocked(&self, register: Register) -> bool {
        self.blocked_registers.contains(&register)
    }

    pub(super) fn code_segment_is_blocked(&self) -> bool {
        self.block_code_segment
    }

    pub(super) fn constants_segment_is_blocked(&self) -> bool {
        self.block_constants_segment
    }

    pub(super) fn max_stack_size(&self) -> Option<usize> {
        self.max_stack_size
    }

    /// The lowest address the stack pointer may reach while pushes are
    /// still allowed.
    pub(super) fn min_stack_address(&self) -> Address {
        match self.max_stack_size {
            Some(size) => (constants::MEMORY_SIZE - size) as Address,
            None => 0,
        }
    }
}

impl BitAndAssign<&Config> for Config {
    fn bitand_assign(&mut self, other: &Config) {
        self.blocked_registers
            .extend(other.blocked_registers.iter().cloned());

        self.block_code_segment |= other.block_code_segment;
        self.block_constants_segment |= other.block_constants_segment;

        self.max_stack_size = match (self.max_stack_size, other.max_stack_size) {
            (Some(lhs), Some(rhs)) => Some(lhs.min(rhs)),
            (lhs, rhs) => lhs.or(rhs),
        };
    }
}

impl BitAnd<&Config> for Config {
    type Output = Config;

    fn bitand(mut self, other: &Config) -> Config {
        self &= other;
        self
    }
}

use crate::exec;
use crate::flags::Flags;
use crate::{constants, Address, Register, Word};

use super::config::Config;
use super::errors::ExecutionError;

/// Marks accesses performed by the execution machinery itself: instruction
/// fetch and the utility-register traffic of the stack and call protocols.
/// Internal accesses bypass the sandbox policy but not the bounds checks.
pub(super) const INTERNAL: bool = true;
/// Marks operand-level accesses of user instructions; the sandbox policy
/// applies.
pub(super) const USER: bool = false;

/// The machine state of one executor: memory, register file, flags, and
/// the sandbox policy of the current run.
///
/// Memory and registers are allocated once and reused across runs;
/// [`prepare_for_execution`](Storage::prepare_for_execution) copies the
/// new image over the start of memory and re-seats the utility registers.
pub struct Storage {
    memory: Vec<Word>,
    registers: [Word; constants::REGISTER_COUNT],
    flags: Flags,
    config: Config,
    code_end: Address,
    constants_end: Address,
}

impl Storage {
    pub fn new() -> Storage {
        Storage {
            memory: vec![0; constants::MEMORY_SIZE],
            registers: [0; constants::REGISTER_COUNT],
            flags: Flags::default(),
            config: Config::default(),
            code_end: 0,
            constants_end: 0,
        }
    }

    pub fn prepare_for_execution(&mut self, data: &exec::Data, config: Config) {
        log::debug!("execution config: {:?}", config);
        self.config = config;

        self.memory[..data.code.len()].copy_from_slice(&data.code);
        self.memory[data.code.len()..data.image_size()].copy_from_slice(&data.constants);

        self.code_end = data.code.len() as Address;
        self.constants_end = data.image_size() as Address;

        self.registers[constants::CALL_FRAME_REGISTER as usize] = data.initial_stack;
        self.registers[constants::STACK_REGISTER as usize] = data.initial_stack;
        self.registers[constants::INSTRUCTION_REGISTER as usize] = data.entrypoint;
    }

    pub(super) fn reg(&self, register: Register, internal: bool) -> Result<Word, ExecutionError> {
        self.check_register(register, internal)?;
        Ok(self.registers[register as usize])
    }

    pub(super) fn set_reg(
        &mut self,
        register: Register,
        value: Word,
        internal: bool,
    ) -> Result<(), ExecutionError> {
        self.check_register(register, internal)?;
        self.registers[register as usize] = value;
        Ok(())
    }

    pub(super) fn mem(&self, address: Address, internal: bool) -> Result<Word, ExecutionError> {
        self.check_address(address, internal)?;
        Ok(self.memory[address as usize])
    }

    pub(super) fn set_mem(
        &mut self,
        address: Address,
        value: Word,
        internal: bool,
    ) -> Result<(), ExecutionError> {
        self.check_address(address, internal)?;
        self.memory[address as usize] = value;
        Ok(())
    }

    pub(super) fn flags(&self) -> Flags {
        self.flags
    }

    pub(super) fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Checked before every push. The stack pointer may leave memory only
    /// by wrapping below zero, which the first check catches as a huge
    /// address.
    pub(super) fn check_push_allowed(&self) -> Result<(), ExecutionError> {
        let stack_address = self.registers[constants::STACK_REGISTER as usize];

        if stack_address as usize > constants::MEMORY_SIZE {
            return Err(ExecutionError::StackPointerOutOfMemory(stack_address));
        }

        if stack_address < self.config.min_stack_address() {
            return Err(ExecutionError::StackOverflow {
                // bounded, otherwise min_stack_address would be 0
                max_size: self.config.max_stack_size().unwrap_or(0),
            });
        }

        Ok(())
    }

    fn check_register(&self, register: Register, internal: bool) -> Result<(), ExecutionError> {
        if register as usize >= constants::REGISTER_COUNT {
            return Err(ExecutionError::InvalidRegister(register));
        }

        if !internal && self.config.register_is_blocked(register) {
            return Err(ExecutionError::RegisterIsBlocked(register));
        }

        Ok(())
    }

    fn check_address(&self, address: Address, internal: bool) -> Result<(), ExecutionError> {
        if address as usize >= constants::MEMORY_SIZE {
            return Err(ExecutionError::AddressOutOfMemory(address));
        }

        if internal {
            return Ok(());
        }

        if self.config.code_segment_is_blocked() && address < self.code_end {
            return Err(ExecutionError::CodeSegmentBlocked(address));
        }

        if self.config.constants_segment_is_blocked()
            && address >= self.code_end
            && address < self.constants_end
        {
            return Err(ExecutionError::ConstantsSegmentBlocked(address));
        }

        Ok(())
    }
}

//! The Karma executor: a fetch/decode/dispatch loop over instruction
//! memory with a configurable sandbox.
//!
//! Per-format operations are plain functions over a mutable [`Storage`];
//! dispatch is one exhaustive `match` on the closed [`Opcode`] enum, so an
//! unhandled command cannot exist past compilation.

mod common;
mod config;
mod errors;
mod j;
mod ri;
mod rm;
mod rr;
mod storage;

use std::io::{self, BufRead, Write};

use num_traits::FromPrimitive;

use crate::exec;
use crate::flags::Flags;
use crate::instructions::{self, Opcode};
use crate::{constants, Register, Word};

pub use config::{Config, UTILITY_REGISTERS};
pub use errors::ExecutionError;
pub use storage::Storage;

use storage::INTERNAL;

/// The value a program returns through the EXIT syscall.
pub type ReturnCode = Word;

/// I/O handles of one run; syscalls read and write through these.
pub struct Io<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

pub struct Executor {
    storage: Storage,
    base_config: Config,
}

impl Executor {
    pub fn new() -> Executor {
        Executor::with_config(Config::default())
    }

    /// The base config is combined with every per-run config; it can only
    /// ever be tightened by a run, never relaxed.
    pub fn with_config(base_config: Config) -> Executor {
        Executor {
            storage: Storage::new(),
            base_config,
        }
    }

    /// Runs a program against standard input and output.
    pub fn execute(&mut self, data: &exec::Data) -> Result<ReturnCode, ExecutionError> {
        self.execute_with_config(data, Config::default())
    }

    pub fn execute_with_config(
        &mut self,
        data: &exec::Data,
        config: Config,
    ) -> Result<ReturnCode, ExecutionError> {
        let stdin = io::stdin();
        let stdout = io::stdout();

        let mut input = stdin.lock();
        let mut output = stdout.lock();

        let mut io = Io {
            input: &mut input,
            output: &mut output,
        };

        self.execute_with_io(data, config, &mut io)
    }

    /// Runs a program with explicit I/O handles.
    pub fn execute_with_io(
        &mut self,
        data: &exec::Data,
        config: Config,
        io: &mut Io,
    ) -> Result<ReturnCode, ExecutionError> {
        let config = self.base_config.clone() & &config;
        self.storage.prepare_for_execution(data, config);

        loop {
            let address = self.storage.reg(constants::INSTRUCTION_REGISTER, INTERNAL)?;

            if address as usize >= constants::MEMORY_SIZE {
                return Err(ExecutionError::ExecPointerOutOfMemory(address));
            }

            let command = self.storage.mem(address, INTERNAL)?;

            if let Some(code) = self.execute_command(command, io)? {
                return Ok(code);
            }
        }
    }

    /// Reads a register; meant for inspecting the machine state after a
    /// run (the sandbox does not apply).
    pub fn register(&self, register: Register) -> Result<Word, ExecutionError> {
        self.storage.reg(register, INTERNAL)
    }

    /// Reads a memory word; meant for inspecting the machine state after
    /// a run (the sandbox does not apply).
    pub fn memory_word(&self, address: Word) -> Result<Word, ExecutionError> {
        self.storage.mem(address, INTERNAL)
    }

    /// The comparison flags as the last run left them.
    pub fn flags(&self) -> Flags {
        self.storage.flags()
    }

    fn execute_command(
        &mut self,
        command: Word,
        io: &mut Io,
    ) -> Result<Option<ReturnCode>, ExecutionError> {
        // the incremented value is the instruction's own view of r15, so
        // a call records the fall-through address
        let next = self
            .storage
            .reg(constants::INSTRUCTION_REGISTER, INTERNAL)?
            .wrapping_add(1);
        self.storage
            .set_reg(constants::INSTRUCTION_REGISTER, next, INTERNAL)?;

        let raw_code = instructions::opcode_bits(command);
        let code =
            Opcode::from_u32(raw_code).ok_or(ExecutionError::UnknownCommand(raw_code))?;

        let storage = &mut self.storage;

        let rm_args = instructions::parse_rm(command);
        let rr_args = instructions::parse_rr(command);
        let ri_args = instructions::parse_ri(command);
        let j_args = instructions::parse_j(command);

        match code {
            Opcode::HALT => return ri::halt(),
            Opcode::SYSCALL => return ri::syscall(storage, io, ri_args),

            Opcode::ADD => rr::add(storage, rr_args)?,
            Opcode::ADDI => ri::addi(storage, ri_args)?,
            Opcode::SUB => rr::sub(storage, rr_args)?,
            Opcode::SUBI => ri::subi(storage, ri_args)?,
            Opcode::MUL => rr::mul(storage, rr_args)?,
            Opcode::MULI => ri::muli(storage, ri_args)?,
            Opcode::DIV => rr::div(storage, rr_args)?,
            Opcode::DIVI => ri::divi(storage, ri_args)?,

            Opcode::NOT => ri::not(storage, ri_args)?,
            Opcode::SHL => rr::shl(storage, rr_args)?,
            Opcode::SHLI => ri::shli(storage, ri_args)?,
            Opcode::SHR => rr::shr(storage, rr_args)?,
            Opcode::SHRI => ri::shri(storage, ri_args)?,
            Opcode::AND => rr::and(storage, rr_args)?,
            Opcode::ANDI => ri::andi(storage, ri_args)?,
            Opcode::OR => rr::or(storage, rr_args)?,
            Opcode::ORI => ri::ori(storage, ri_args)?,
            Opcode::XOR => rr::xor(storage, rr_args)?,
            Opcode::XORI => ri::xori(storage, ri_args)?,

            Opcode::ITOD => rr::itod(storage, rr_args)?,
            Opcode::DTOI => rr::dtoi(storage, rr_args)?,
            Opcode::ADDD => rr::addd(storage, rr_args)?,
            Opcode::SUBD => rr::subd(storage, rr_args)?,
            Opcode::MULD => rr::muld(storage, rr_args)?,
            Opcode::DIVD => rr::divd(storage, rr_args)?,

            Opcode::CMP => rr::cmp(storage, rr_args)?,
            Opcode::CMPI => ri::cmpi(storage, ri_args)?,
            Opcode::CMPD => rr::cmpd(storage, rr_args)?,

            Opcode::JMP => j::jmp(storage, j_args)?,
            Opcode::JNE => j::jne(storage, j_args)?,
            Opcode::JEQ => j::jeq(storage, j_args)?,
            Opcode::JLE => j::jle(storage, j_args)?,
            Opcode::JL => j::jl(storage, j_args)?,
            Opcode::JGE => j::jge(storage, j_args)?,
            Opcode::JG => j::jg(storage, j_args)?,
            Opcode::CALLI => j::calli(storage, j_args)?,
            Opcode::RET => j::ret(storage)?,

            Opcode::PUSH => ri::push(storage, ri_args)?,
            Opcode::POP => ri::pop(storage, ri_args)?,

            Opcode::LC => ri::lc(storage, ri_args)?,
            Opcode::LA => rm::la(storage, rm_args)?,
            Opcode::MOV => rr::mov(storage, rr_args)?,
            Opcode::LOAD => rm::load(storage, rm_args)?,
            Opcode::LOAD2 => rm::load2(storage, rm_args)?,
            Opcode::STORE => rm::store(storage, rm_args)?,
            Opcode::STORE2 => rm::store2(storage, rm_args)?,
            Opcode::LOADR => rr::loadr(storage, rr_args)?,
            Opcode::LOADR2 => rr::loadr2(storage, rr_args)?,
            Opcode::STORER => rr::storer(storage, rr_args)?,
            Opcode::STORER2 => rr::storer2(storage, rr_args)?,

            Opcode::CALL => rr::call(storage, rr_args)?,
        }

        Ok(None)
    }
}

impl Default for Executor {
    fn default() -> Executor {
        Executor::new()
    }
}

use std::fmt;
use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};
use util::ParseEnumError;

use crate::{constants, Address, Register, Word};

/// A single encoded instruction word.
pub type Bin = Word;

/// Signed 16-bit offset applied to the source register of RR commands.
pub type Modifier = i32;
/// Signed 20-bit immediate operand of RI commands.
pub type Immediate = i32;

/// Instruction encoding formats.
///
/// | Format | Bits 31-24 | Bits 23-20 | Bits 19-16 | Bits 15-0        |
/// |--------|------------|------------|------------|------------------|
/// | RM     | opcode     | reg        | address    | address          |
/// | RR     | opcode     | receiver   | source     | modifier (16s)   |
/// | RI     | opcode     | reg        | immediate  | immediate (20s)  |
/// | J      | opcode     | unused     | address    | address          |
///
/// Signed fields are stored in two's complement; the address fields span
/// the low 20 bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    RM,
    RR,
    RI,
    J,
}

/// The Karma instruction set.
///
/// The discriminants are the binary ABI and must not be renumbered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    // System
    HALT = 0,
    SYSCALL = 1,

    // Integer arithmetic
    ADD = 2,
    ADDI = 3,
    SUB = 4,
    SUBI = 5,
    MUL = 6,
    MULI = 7,
    DIV = 8,
    DIVI = 9,

    // Bitwise operators
    LC = 12,
    SHL = 13,
    SHLI = 14,
    SHR = 15,
    SHRI = 16,
    AND = 17,
    ANDI = 18,
    OR = 19,
    ORI = 20,
    XOR = 21,
    XORI = 22,
    NOT = 23,
    MOV = 24,

    // Real-valued operators
    ADDD = 32,
    SUBD = 33,
    MULD = 34,
    DIVD = 35,
    ITOD = 36,
    DTOI = 37,

    // Stack and calls
    PUSH = 38,
    POP = 39,
    CALL = 40,
    CALLI = 41,
    RET = 42,

    // Comparisons
    CMP = 43,
    CMPI = 44,
    CMPD = 45,

    // Jumps
    JMP = 46,
    JNE = 47,
    JEQ = 48,
    JLE = 49,
    JL = 50,
    JGE = 51,
    JG = 52,

    // Data transfer
    LOAD = 64,
    STORE = 65,
    LOAD2 = 66,
    STORE2 = 67,
    LOADR = 68,
    LOADR2 = 69,
    STORER = 70,
    STORER2 = 71,
    LA = 72,
}

impl Opcode {
    /// The encoding format of this command.
    pub fn format(self) -> Format {
        use Opcode::*;

        match self {
            LA | LOAD | LOAD2 | STORE | STORE2 => Format::RM,

            ADD | SUB | MUL | DIV | SHL | SHR | AND | OR | XOR | ITOD | DTOI | ADDD | SUBD
            | MULD | DIVD | CMP | CMPD | MOV | LOADR | LOADR2 | STORER | STORER2 | CALL => {
                Format::RR
            }

            HALT | SYSCALL | ADDI | SUBI | MULI | DIVI | NOT | SHLI | SHRI | ANDI | ORI | XORI
            | CMPI | PUSH | POP | LC => Format::RI,

            JMP | JNE | JEQ | JLE | JL | JGE | JG | CALLI | RET => Format::J,
        }
    }

    /// The assembly mnemonic.
    pub fn name(self) -> &'static str {
        use Opcode::*;

        match self {
            HALT => "halt",
            SYSCALL => "syscall",
            ADD => "add",
            ADDI => "addi",
            SUB => "sub",
            SUBI => "subi",
            MUL => "mul",
            MULI => "muli",
            DIV => "div",
            DIVI => "divi",
            LC => "lc",
            SHL => "shl",
            SHLI => "shli",
            SHR => "shr",
            SHRI => "shri",
            AND => "and",
            ANDI => "andi",
            OR => "or",
            ORI => "ori",
            XOR => "xor",
            XORI => "xori",
            NOT => "not",
            MOV => "mov",
            ADDD => "addd",
            SUBD => "subd",
            MULD => "muld",
            DIVD => "divd",
            ITOD => "itod",
            DTOI => "dtoi",
            PUSH => "push",
            POP => "pop",
            CALL => "call",
            CALLI => "calli",
            RET => "ret",
            CMP => "cmp",
            CMPI => "cmpi",
            CMPD => "cmpd",
            JMP => "jmp",
            JNE => "jne",
            JEQ => "jeq",
            JLE => "jle",
            JL => "jl",
            JGE => "jge",
            JG => "jg",
            LOAD => "load",
            STORE => "store",
            LOAD2 => "load2",
            STORE2 => "store2",
            LOADR => "loadr",
            LOADR2 => "loadr2",
            STORER => "storer",
            STORER2 => "storer2",
            LA => "la",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Opcode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Opcode, ParseEnumError> {
        use Opcode::*;

        match s {
            "halt" => Ok(HALT),
            "syscall" => Ok(SYSCALL),
            "add" => Ok(ADD),
            "addi" => Ok(ADDI),
            "sub" => Ok(SUB),
            "subi" => Ok(SUBI),
            "mul" => Ok(MUL),
            "muli" => Ok(MULI),
            "div" => Ok(DIV),
            "divi" => Ok(DIVI),
            "lc" => Ok(LC),
            "shl" => Ok(SHL),
            "shli" => Ok(SHLI),
            "shr" => Ok(SHR),
            "shri" => Ok(SHRI),
            "and" => Ok(AND),
            "andi" => Ok(ANDI),
            "or" => Ok(OR),
            "ori" => Ok(ORI),
            "xor" => Ok(XOR),
            "xori" => Ok(XORI),
            "not" => Ok(NOT),
            "mov" => Ok(MOV),
            "addd" => Ok(ADDD),
            "subd" => Ok(SUBD),
            "muld" => Ok(MULD),
            "divd" => Ok(DIVD),
            "itod" => Ok(ITOD),
            "dtoi" => Ok(DTOI),
            "push" => Ok(PUSH),
            "pop" => Ok(POP),
            "call" => Ok(CALL),
            "calli" => Ok(CALLI),
            "ret" => Ok(RET),
            "cmp" => Ok(CMP),
            "cmpi" => Ok(CMPI),
            "cmpd" => Ok(CMPD),
            "jmp" => Ok(JMP),
            "jne" => Ok(JNE),
            "jeq" => Ok(JEQ),
            "jle" => Ok(JLE),
            "jl" => Ok(JL),
            "jge" => Ok(JGE),
            "jg" => Ok(JG),
            "load" => Ok(LOAD),
            "store" => Ok(STORE),
            "load2" => Ok(LOAD2),
            "store2" => Ok(STORE2),
            "loadr" => Ok(LOADR),
            "loadr2" => Ok(LOADR2),
            "storer" => Ok(STORER),
            "storer2" => Ok(STORER2),
            "la" => Ok(LA),
            _ => Err(ParseEnumError {
                value: s.to_string(),
                enum_name: "Opcode",
            }),
        }
    }
}

/// Codes selected by the immediate operand of `syscall`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Syscall {
    EXIT = 0,
    SCANINT = 100,
    SCANDOUBLE = 101,
    PRINTINT = 102,
    PRINTDOUBLE = 103,
    GETCHAR = 104,
    PUTCHAR = 105,
}

/// The name of a register, `r0`..`r15`.
pub fn register_name(reg: Register) -> String {
    format!("r{}", reg)
}

pub fn register_from_name(name: &str) -> Result<Register, ParseEnumError> {
    let err = || ParseEnumError {
        value: name.to_string(),
        enum_name: "Register",
    };

    let number = name.strip_prefix('r').ok_or_else(err)?;

    // reject "r07" and "r+1" style spellings that u32 parsing would accept
    if number.is_empty()
        || (number.len() > 1 && number.starts_with('0'))
        || !number.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(err());
    }

    match number.parse::<Register>() {
        Ok(reg) if (reg as usize) < constants::REGISTER_COUNT => Ok(reg),
        _ => Err(err()),
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RmArgs {
    pub reg: Register,
    pub addr: Address,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RrArgs {
    pub recv: Register,
    pub src: Register,
    pub modifier: Modifier,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RiArgs {
    pub reg: Register,
    pub imm: Immediate,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JArgs {
    pub addr: Address,
}

/// Extracts the raw opcode byte of an instruction word.
#[inline]
pub fn opcode_bits(bin: Bin) -> Word {
    bin >> constants::CODE_SHIFT
}

#[inline]
pub fn build_rm(code: Opcode, args: RmArgs) -> Bin {
    ((code as Word) << constants::CODE_SHIFT)
        | ((args.reg & constants::REGISTER_MASK) << constants::RECV_SHIFT)
        | (args.addr & constants::ADDRESS_MASK)
}

#[inline]
pub fn parse_rm(bin: Bin) -> RmArgs {
    RmArgs {
        reg: (bin >> constants::RECV_SHIFT) & constants::REGISTER_MASK,
        addr: bin & constants::ADDRESS_MASK,
    }
}

#[inline]
pub fn build_rr(code: Opcode, args: RrArgs) -> Bin {
    ((code as Word) << constants::CODE_SHIFT)
        | ((args.recv & constants::REGISTER_MASK) << constants::RECV_SHIFT)
        | ((args.src & constants::REGISTER_MASK) << constants::SRC_SHIFT)
        | util::unsigned_bits(args.modifier, constants::MOD_SIZE)
}

#[inline]
pub fn parse_rr(bin: Bin) -> RrArgs {
    RrArgs {
        recv: (bin >> constants::RECV_SHIFT) & constants::REGISTER_MASK,
        src: (bin >> constants::SRC_SHIFT) & constants::REGISTER_MASK,
        modifier: util::signed_value(bin, constants::MOD_SIZE),
    }
}

#[inline]
pub fn build_ri(code: Opcode, args: RiArgs) -> Bin {
    ((code as Word) << constants::CODE_SHIFT)
        | ((args.reg & constants::REGISTER_MASK) << constants::RECV_SHIFT)
        | util::unsigned_bits(args.imm, constants::IMM_SIZE)
}

#[inline]
pub fn parse_ri(bin: Bin) -> RiArgs {
    RiArgs {
        reg: (bin >> constants::RECV_SHIFT) & constants::REGISTER_MASK,
        imm: util::signed_value(bin, constants::IMM_SIZE),
    }
}

#[inline]
pub fn build_j(code: Opcode, args: JArgs) -> Bin {
    ((code as Word) << constants::CODE_SHIFT) | (args.addr & constants::ADDRESS_MASK)
}

#[inline]
pub fn parse_j(bin: Bin) -> JArgs {
    JArgs {
        addr: bin & constants::ADDRESS_MASK,
    }
}

use crate::{Register, Word};

pub const WORD_BYTES: usize = std::mem::size_of::<Word>();
pub const WORD_WIDTH: u32 = (WORD_BYTES * 8) as u32;

pub const MAX_WORD: Word = std::u32::MAX;

/// Memory size in words. Addresses are word indices, not byte offsets.
pub const MEMORY_SIZE: usize = 1 << 20;

pub const REGISTER_COUNT: usize = 16;

/// Saved and restored by the call/return protocol.
pub const CALL_FRAME_REGISTER: Register = 13;
pub const STACK_REGISTER: Register = 14;
pub const INSTRUCTION_REGISTER: Register = 15;

// Instruction word layout. The opcode always occupies the top byte; the
// receiver register the next nibble. RR puts the source register below the
// receiver, followed by a 16-bit signed modifier; RI has a 20-bit signed
// immediate and RM/J a 20-bit address in the same position.

pub const CODE_SHIFT: Word = 24;
pub const RECV_SHIFT: Word = 20;
pub const SRC_SHIFT: Word = 16;

pub const REGISTER_MASK: Word = 0xf;
pub const ADDRESS_MASK: Word = 0xfffff;

pub const MOD_SIZE: u32 = 16;
pub const IMM_SIZE: u32 = 20;

//! Assembler and disassembler for the [karma](../karma/index.html)
//! register machine.
//!
//! The main entry points are [`assemble`](fn.assemble.html), which turns
//! a root source file and everything it includes into a runnable
//! [`exec::Data`](../karma/exec/struct.Data.html) image, and
//! [`disassemble`](disasm/fn.disassemble.html), which recovers assembly
//! text from an image.
//!
//! # Karma assembly language
//!
//! A program is a sequence of lines. Tokens are separated by spaces or
//! tabs; a `#` starts a comment running to the end of the line unless it
//! is preceded by a backslash.
//!
//! ## Includes
//!
//! A file may start with any number of `include <relative-path>` lines.
//! Included files are assembled before the rest of the including file,
//! in depth-first order of first encounter; a file included twice is
//! assembled once. Include directives below the first regular line are
//! not directives at all and fail to parse as commands.
//!
//! ## Labels and the entrypoint
//!
//! `name:` defines a label at the next emitted command or constant. A
//! label is a non-empty word of lowercase letters, digits, `_` and `.`,
//! not starting with a digit. The directive `end <address-or-label>`
//! declares the entrypoint; it must appear exactly once per program.
//!
//! ## Constants
//!
//! A constant line is a type keyword followed by the value, which runs
//! to the end of the line:
//!
//! | Keyword  | Value                                    | Example              |
//! |----------|------------------------------------------|----------------------|
//! | `uint32` | integer literal                          | `uint32 42`          |
//! | `uint64` | integer literal                          | `uint64 0xffffffffff` |
//! | `double` | decimal floating-point literal           | `double 2.71828`     |
//! | `char`   | one character in single quotes           | `char 'x'`           |
//! | `string` | characters in double quotes              | `string "hi\n"`      |
//!
//! Integer literals may be decimal, hexadecimal (`0x`) or octal
//! (leading `0`). Inside quotes the escapes `\'`, `\"`, `\?`, `\\`,
//! `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v` and `\#` are recognized.
//!
//! ## Commands
//!
//! One command per line: a mnemonic followed by its operands. Registers
//! are spelled `r0`..`r15`. Depending on the command format the operands
//! are `reg addr` (register-memory), `reg reg modifier`
//! (register-register), `reg imm` (register-immediate) or a single
//! `addr` (jumps). Address operands take a non-negative literal or a
//! label; modifiers and immediates are signed literals.

mod data;
mod file_assembler;
mod int_util;
mod labels;
mod reader;
mod syntax;

pub mod disasm;
pub mod errors;
pub mod includes;


use std::path::{Path, PathBuf};

use karma::exec;

use data::FileData;
use errors::{CompileError, Error};
use file_assembler::FileAssembler;

pub use disasm::{disassemble, disassemble_file};

/// Assembles the program rooted at `root` into a runnable image.
pub fn assemble(root: &Path) -> Result<exec::Data, CompileError> {
    log::info!("resolving includes of {}", root.display());
    let files = includes::resolve(root)?;
    log::info!("resolved includes, {} file(s) to assemble", files.len());

    let mut artifacts = Vec::with_capacity(files.len());
    for file in 0..files.len() {
        log::info!("assembling {}", files.path(file).display());
        artifacts.push(FileAssembler::assemble(&files, file)?);
    }

    FileData::merge_all(artifacts)?.into_exec_data()
}

/// Assembles `src` and writes the executable. Without a destination the
/// executable lands next to the source, named after its stem. Returns
/// the path written.
pub fn assemble_to_file(src: &Path, dst: Option<&Path>) -> Result<PathBuf, Error> {
    let data = assemble(src)?;

    let dst = match dst {
        Some(dst) => dst.to_owned(),
        None => src.with_extension(kexfile::DEFAULT_EXTENSION),
    };

    log::info!("writing executable to {}", dst.display());
    kexfile::write_file(&dst, &data)?;

    Ok(dst)
}

//! The Karma executable container.
//!
//! An executable is a 512-byte header followed by the code segment and
//! then the constants segment, each word written as 4 little-endian
//! bytes:
//!
//! | Offset | Size | Content                        |
//! |--------|------|--------------------------------|
//! | 0      | 16   | `ThisIsKarmaExec\0`            |
//! | 16     | 4    | code segment size in bytes     |
//! | 20     | 4    | constants segment size in bytes|
//! | 24     | 4    | entrypoint (word address)      |
//! | 28     | 4    | initial stack (word address)   |
//! | 32     | 4    | processor ID                   |
//! | 36     | 476  | ASCII `'0'` padding            |

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter, SeekFrom};
use std::path::{Path, PathBuf};

use byteorder::{ReadBytesExt, WriteBytesExt};
use thiserror::Error;
use util::Endian;

use karma::exec::Data;
use karma::{constants, Word};

pub const INTRO: &str = "ThisIsKarmaExec";
/// Intro string plus its terminating zero byte.
pub const INTRO_SIZE: usize = 16;
pub const HEADER_SIZE: usize = 512;
const META_END: usize = 36;

pub const PROCESSOR_ID: Word = 239;

pub const DEFAULT_EXTENSION: &str = "a";

#[derive(Debug, Error)]
pub enum ExecFileError {
    #[error("failed to open \"{path}\": {source}")]
    FailedToOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} bytes are too small to contain a valid executable header")]
    TooSmallForHeader(u64),

    #[error("{0} bytes of segments do not fit into machine memory")]
    TooBigForMemory(u64),

    #[error(
        "executable size {size} does not equal the header plus the declared \
         segments ({code_size} code bytes, {constants_size} constants bytes)"
    )]
    InvalidExecSize {
        size: u64,
        code_size: u32,
        constants_size: u32,
    },

    #[error("the executable intro string is not zero-terminated (read {0:?})")]
    NoTrailingZeroInIntro(String),

    #[error("invalid executable intro string {0:?}")]
    InvalidIntroString(String),

    #[error("invalid processor ID {0}")]
    InvalidProcessorID(Word),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes an executable image. The caller provides any writer; file
/// creation lives in [`write_file`].
pub fn write<W: Write>(writer: &mut W, data: &Data) -> std::io::Result<()> {
    writer.write_all(INTRO.as_bytes())?;
    writer.write_all(&[0])?;

    writer.write_u32::<Endian>((data.code.len() * constants::WORD_BYTES) as u32)?;
    writer.write_u32::<Endian>((data.constants.len() * constants::WORD_BYTES) as u32)?;
    writer.write_u32::<Endian>(data.entrypoint)?;
    writer.write_u32::<Endian>(data.initial_stack)?;
    writer.write_u32::<Endian>(PROCESSOR_ID)?;

    writer.write_all(&vec![b'0'; HEADER_SIZE - META_END])?;

    for &word in data.code.iter().chain(data.constants.iter()) {
        writer.write_u32::<Endian>(word)?;
    }

    Ok(())
}

/// Reads and validates an executable image of `exec_size` total bytes.
pub fn read<R: Read + Seek>(reader: &mut R, exec_size: u64) -> Result<Data, ExecFileError> {
    if exec_size < HEADER_SIZE as u64 {
        return Err(ExecFileError::TooSmallForHeader(exec_size));
    }

    let segments_size = exec_size - HEADER_SIZE as u64;
    if segments_size > (constants::MEMORY_SIZE * constants::WORD_BYTES) as u64 {
        return Err(ExecFileError::TooBigForMemory(segments_size));
    }

    let mut intro = [0u8; INTRO_SIZE];
    reader.read_exact(&mut intro)?;

    if intro[INTRO_SIZE - 1] != 0 {
        return Err(ExecFileError::NoTrailingZeroInIntro(
            String::from_utf8_lossy(&intro[..INTRO_SIZE - 1]).into_owned(),
        ));
    }

    let intro_str = String::from_utf8_lossy(&intro[..INTRO_SIZE - 1]).into_owned();
    if intro_str != INTRO {
        return Err(ExecFileError::InvalidIntroString(intro_str));
    }

    let code_size = reader.read_u32::<Endian>()?;
    let constants_size = reader.read_u32::<Endian>()?;

    if exec_size != HEADER_SIZE as u64 + u64::from(code_size) + u64::from(constants_size) {
        return Err(ExecFileError::InvalidExecSize {
            size: exec_size,
            code_size,
            constants_size,
        });
    }

    let entrypoint = reader.read_u32::<Endian>()?;
    let initial_stack = reader.read_u32::<Endian>()?;

    let processor_id = reader.read_u32::<Endian>()?;
    if processor_id != PROCESSOR_ID {
        return Err(ExecFileError::InvalidProcessorID(processor_id));
    }

    reader.seek(SeekFrom::Start(HEADER_SIZE as u64))?;

    let read_segment = |reader: &mut R, byte_size: u32| -> std::io::Result<Vec<Word>> {
        let words = byte_size as usize / constants::WORD_BYTES;
        let mut segment = Vec::with_capacity(words);

        for _ in 0..words {
            segment.push(reader.read_u32::<Endian>()?);
        }

        Ok(segment)
    };

    let code = read_segment(reader, code_size)?;
    let constants = read_segment(reader, constants_size)?;

    Ok(Data {
        entrypoint,
        initial_stack,
        code,
        constants,
    })
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Data, ExecFileError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| ExecFileError::FailedToOpen {
        path: path.to_owned(),
        source,
    })?;

    let exec_size = file.metadata()?.len();

    read(&mut BufReader::new(file), exec_size)
}

pub fn write_file<P: AsRef<Path>>(path: P, data: &Data) -> Result<(), ExecFileError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| ExecFileError::FailedToOpen {
        path: path.to_owned(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write(&mut writer, data)?;
    writer.flush()?;

    Ok(())
}

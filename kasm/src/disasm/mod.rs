//! The disassembler: recovers assembly text from a program image. Typed
//! constants are decoded back to their literals, and jump and
//! memory-reference targets get synthesized labels so the output
//! assembles back to the same image.

mod labels;

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use num_traits::FromPrimitive;

use karma::exec;
use karma::instructions::{self, register_name, Bin, Format, Opcode};
use karma::{pool, Address, Word};

use crate::errors::{DisassembleError, Error};
use labels::Labels;

type Result<T> = std::result::Result<T, DisassembleError>;

/// Disassembles a program image to assembly text.
pub fn disassemble(data: &exec::Data) -> Result<String> {
    let mut labels = Labels::new();
    let mut out = String::new();

    disassemble_constants(data, &mut labels, &mut out)?;

    if !data.constants.is_empty() {
        out.push('\n');
    }

    labels.prepare_command_labels(data)?;

    for (index, &command) in data.code.iter().enumerate() {
        if let Some(label) = labels.command_label_at(index as Address) {
            let _ = writeln!(out, "{}:", label);
        }

        let _ = writeln!(out, "    {}", command_string(command, &labels)?);
    }

    let _ = writeln!(out, "end {}", labels::MAIN_LABEL);

    Ok(out)
}

/// Disassembles an executable file, writing the text next to it (stem
/// plus `_disassembled.krm`) unless a destination is given. Returns the
/// path written.
pub fn disassemble_file(src: &Path, dst: Option<&Path>) -> std::result::Result<PathBuf, Error> {
    let data = kexfile::read_file(src)?;

    log::info!("disassembling {}", src.display());
    let text = disassemble(&data)?;

    let dst = match dst {
        Some(dst) => dst.to_owned(),
        None => {
            let stem = src.file_stem().unwrap_or_default().to_string_lossy();
            src.with_file_name(format!("{}_disassembled.krm", stem))
        }
    };

    let mut file = File::create(&dst)?;
    file.write_all(text.as_bytes())?;

    log::info!("wrote {}", dst.display());

    Ok(dst)
}

////////////////////////////////////////////////////////////////////////
//                              constants                             //
////////////////////////////////////////////////////////////////////////

fn disassemble_constants(
    data: &exec::Data,
    labels: &mut Labels,
    out: &mut String,
) -> Result<()> {
    let code_end = data.code.len() as Address;
    let constants = &data.constants;
    let mut pos = 0;

    while pos < constants.len() {
        let tag = constants[pos];
        let value_type =
            pool::Type::from_u32(tag).ok_or(DisassembleError::UnknownConstantType(tag))?;
        pos += 1;

        // the label addresses the first data word, matching how the
        // assembler records constant labels
        let label = labels.record_constant_label(code_end + pos as Address);

        let value = match value_type {
            pool::Type::UINT32 => uint32_value(constants, &mut pos)?,
            pool::Type::UINT64 => uint64_value(constants, &mut pos)?,
            pool::Type::DOUBLE => double_value(constants, &mut pos)?,
            pool::Type::CHAR => char_value(constants, &mut pos)?,
            pool::Type::STRING => string_value(constants, &mut pos)?,
        };

        let _ = writeln!(out, "{}: {} {}", label, value_type, value);
    }

    Ok(())
}

fn take(constants: &[Word], pos: &mut usize, value_type: pool::Type) -> Result<Word> {
    if *pos >= constants.len() {
        return Err(DisassembleError::ConstantNoValue { value_type });
    }

    let word = constants[*pos];
    *pos += 1;
    Ok(word)
}

fn uint32_value(constants: &[Word], pos: &mut usize) -> Result<String> {
    Ok(take(constants, pos, pool::Type::UINT32)?.to_string())
}

fn uint64_value(constants: &[Word], pos: &mut usize) -> Result<String> {
    let low = take(constants, pos, pool::Type::UINT64)?;
    let high = take(constants, pos, pool::Type::UINT64)?;

    Ok(util::join_words(low, high).to_string())
}

fn double_value(constants: &[Word], pos: &mut usize) -> Result<String> {
    let low = take(constants, pos, pool::Type::DOUBLE)?;
    let high = take(constants, pos, pool::Type::DOUBLE)?;

    Ok(format_double(f64::from_bits(util::join_words(low, high))))
}

fn char_value(constants: &[Word], pos: &mut usize) -> Result<String> {
    let word = take(constants, pos, pool::Type::CHAR)?;
    let symbol = ((word as u8) as char).to_string();

    Ok(format!("'{}'", crate::syntax::escape(&symbol)))
}

fn string_value(constants: &[Word], pos: &mut usize) -> Result<String> {
    let mut value = String::new();

    loop {
        if *pos >= constants.len() {
            return Err(DisassembleError::NoTrailingZeroInString);
        }

        let word = constants[*pos];
        *pos += 1;

        if word == pool::STRING_END {
            break;
        }

        value.push((word as u8) as char);
    }

    Ok(format!("\"{}\"", crate::syntax::escape(&value)))
}

/// Prints a double with up to [`pool::DOUBLE_PRECISION`] significant
/// digits, choosing fixed or scientific notation the way iostreams do.
fn format_double(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return value.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    let precision = pool::DOUBLE_PRECISION;

    // the exponent marker is always present in {:e} output
    let scientific = format!("{:.*e}", precision - 1, value);
    let e_pos = scientific.find('e').unwrap();
    let exponent: i32 = scientific[e_pos + 1..].parse().unwrap_or(0);

    let digits: String = scientific[..e_pos]
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    if exponent < -4 || exponent >= precision as i32 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }

        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });

        let magnitude = exponent.abs();
        if magnitude < 10 {
            out.push('0');
        }
        out.push_str(&magnitude.to_string());
    } else if exponent >= 0 {
        let int_len = exponent as usize + 1;

        if digits.len() <= int_len {
            out.push_str(digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-exponent - 1) as usize));
        out.push_str(digits);
    }

    out
}

////////////////////////////////////////////////////////////////////////
//                              commands                              //
////////////////////////////////////////////////////////////////////////

fn command_string(command: Bin, labels: &Labels) -> Result<String> {
    let raw_code = instructions::opcode_bits(command);
    let code =
        Opcode::from_u32(raw_code).ok_or(DisassembleError::UnknownCommand(raw_code))?;

    Ok(match code.format() {
        Format::RM => {
            let args = instructions::parse_rm(command);
            format!(
                "{} {} {}",
                code,
                register_name(args.reg),
                address_operand(args.addr, labels)
            )
        }

        Format::RR => {
            let args = instructions::parse_rr(command);
            format!(
                "{} {} {} {}",
                code,
                register_name(args.recv),
                register_name(args.src),
                args.modifier
            )
        }

        Format::RI => {
            let args = instructions::parse_ri(command);
            format!("{} {} {}", code, register_name(args.reg), args.imm)
        }

        Format::J => {
            let args = instructions::parse_j(command);

            // the address bits of a return are padding, never a target
            if code == Opcode::RET {
                format!("{} {}", code, args.addr)
            } else {
                format!("{} {}", code, address_operand(args.addr, labels))
            }
        }
    })
}

fn address_operand(addr: Address, labels: &Labels) -> String {
    match labels.try_get(addr) {
        Some(label) => label.to_string(),
        None => addr.to_string(),
    }
}

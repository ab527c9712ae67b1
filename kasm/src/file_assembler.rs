//! The per-file assembler: a state machine over the tokens of one source
//! file, producing code words, constant words, and label bookkeeping.

use std::str::FromStr;

use karma::instructions::{
    build_j, build_ri, build_rm, build_rr, Format, Immediate, JArgs, Opcode, RiArgs, RmArgs,
    RrArgs,
};
use karma::{constants, pool, Address, Register, Word};

use crate::data::FileData;
use crate::errors::CompileError;
use crate::includes::SourceSet;
use crate::int_util::{self, IntParse};
use crate::labels::Labels;
use crate::reader::Cursor;
use crate::syntax;

type Result<T> = std::result::Result<T, CompileError>;

pub struct FileAssembler<'a> {
    cursor: Cursor<'a>,
    data: FileData,

    /// A label waiting for the next emission to attach to.
    pending_label: Option<(String, String)>,
}

impl<'a> FileAssembler<'a> {
    /// Assembles the file with index `file` of the set.
    pub fn assemble(files: &'a SourceSet, file: usize) -> Result<FileData> {
        let mut assembler = FileAssembler {
            cursor: Cursor::open(files, file)?,
            data: FileData::default(),
            pending_label: None,
        };

        if let Some(first_token) = assembler.skip_includes()? {
            assembler.process_line(Some(first_token))?;

            while assembler.cursor.next_line()? {
                assembler.process_line(None)?;
            }
        }

        if let Some((label, pos)) = assembler.pending_label {
            return Err(CompileError::FileEndsWithLabel { label, pos });
        }

        Ok(assembler.data)
    }

    /// Skips the include directives at the top of the file and returns
    /// the first non-include token, which belongs to the body.
    fn skip_includes(&mut self) -> Result<Option<String>> {
        while self.cursor.next_line()? {
            let token = match self.cursor.next_token() {
                Some(token) => token,
                None => continue,
            };

            if token != syntax::INCLUDE_DIRECTIVE {
                return Ok(Some(token));
            }
        }

        Ok(None)
    }

    fn process_line(&mut self, first_token: Option<String>) -> Result<()> {
        let mut token = match first_token {
            Some(token) => token,
            None => match self.cursor.next_token() {
                Some(token) => token,
                None => return Ok(()),
            },
        };

        if self.try_process_label(&token)? {
            token = match self.cursor.next_token() {
                Some(token) => token,
                None => return Ok(()),
            };
        }

        if self.try_process_entrypoint(&token)? {
            return Ok(());
        }

        if self.try_process_constant(&token)? {
            return Ok(());
        }

        let command = self.parse_command(&token)?;
        self.data.code.push(command);

        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    //                        labels & entrypoint                     //
    ////////////////////////////////////////////////////////////////////

    fn try_process_label(&mut self, token: &str) -> Result<bool> {
        if !token.ends_with(syntax::LABEL_END) {
            return Ok(false);
        }

        let label = &token[..token.len() - 1];

        if let Some((prev_label, prev_pos)) = self.pending_label.take() {
            return Err(CompileError::ConsecutiveLabels {
                label: label.to_string(),
                pos: self.cursor.here(),
                prev_label,
                prev_pos,
            });
        }

        Labels::check(label, &self.cursor.here())?;

        if let Some(prev_pos) = self.data.labels.try_get_pos(label) {
            return Err(CompileError::LabelRedefinition {
                label: label.to_string(),
                pos: self.cursor.here(),
                prev_pos: prev_pos.to_string(),
            });
        }

        self.pending_label = Some((label.to_string(), self.cursor.here()));

        Ok(true)
    }

    fn try_process_entrypoint(&mut self, token: &str) -> Result<bool> {
        if token != syntax::ENTRYPOINT_DIRECTIVE {
            return Ok(false);
        }

        // the entrypoint directive emits nothing a label could attach to
        if let Some((label, label_pos)) = self.pending_label.take() {
            return Err(CompileError::LabelBeforeEntrypoint {
                label,
                label_pos,
                pos: self.cursor.here(),
            });
        }

        if self.data.entrypoint.seen() {
            return Err(CompileError::SecondEntrypoint {
                pos: self.cursor.here(),
                prev_pos: self.data.entrypoint.pos().unwrap_or_default().to_string(),
            });
        }

        let target = match self.cursor.next_token() {
            Some(target) => target,
            None => {
                return Err(CompileError::EntrypointWithoutAddress {
                    pos: self.cursor.here(),
                })
            }
        };

        let address = self.parse_address(&target, true)?;
        self.data.entrypoint.record(address, self.cursor.here());

        if let Some(extra) = self.cursor.next_token() {
            return Err(CompileError::ExtraAfterEntrypoint {
                token: extra,
                pos: self.cursor.here(),
            });
        }

        Ok(true)
    }

    ////////////////////////////////////////////////////////////////////
    //                            constants                           //
    ////////////////////////////////////////////////////////////////////

    fn try_process_constant(&mut self, token: &str) -> Result<bool> {
        let value_type = match pool::Type::from_str(token) {
            Ok(value_type) => value_type,
            Err(_) => return Ok(false),
        };

        if let Some((label, pos)) = self.pending_label.take() {
            // constant labels address the first data word, one past the
            // type tag
            self.data
                .labels
                .record_constant_label(label, self.data.constants.len() + 1, pos);
        }

        let value = match self.cursor.rest_of_line() {
            Some(value) => value,
            None => {
                return Err(CompileError::EmptyConstValue {
                    value_type,
                    pos: self.cursor.here(),
                })
            }
        };

        self.data.constants.push(value_type as Word);

        match value_type {
            pool::Type::UINT32 => self.process_uint32(value_type, &value)?,
            pool::Type::UINT64 => self.process_uint64(value_type, &value)?,
            pool::Type::DOUBLE => self.process_double(value_type, &value)?,
            pool::Type::CHAR => self.process_char(value_type, &value)?,
            pool::Type::STRING => self.process_string(value_type, &value)?,
        }

        Ok(true)
    }

    fn invalid_const(&self, value_type: pool::Type, value: &str) -> CompileError {
        CompileError::InvalidConstValue {
            value_type,
            token: value.to_string(),
            pos: self.cursor.here(),
        }
    }

    fn process_uint32(&mut self, value_type: pool::Type, value: &str) -> Result<()> {
        // a negative literal wraps; taking it modulo 2^32 after 2^64 is
        // still correct
        let parsed = int_util::parse_u64_wrapping(value)
            .ok_or_else(|| self.invalid_const(value_type, value))?;

        self.data.constants.push(parsed as Word);
        Ok(())
    }

    fn process_uint64(&mut self, value_type: pool::Type, value: &str) -> Result<()> {
        let parsed = int_util::parse_u64_wrapping(value)
            .ok_or_else(|| self.invalid_const(value_type, value))?;

        let (low, high) = util::split_words(parsed);
        self.data.constants.push(low);
        self.data.constants.push(high);
        Ok(())
    }

    fn process_double(&mut self, value_type: pool::Type, value: &str) -> Result<()> {
        let parsed =
            int_util::parse_f64(value).ok_or_else(|| self.invalid_const(value_type, value))?;

        let (low, high) = util::split_words(parsed.to_bits());
        self.data.constants.push(low);
        self.data.constants.push(high);
        Ok(())
    }

    fn unquote(
        &self,
        value: &str,
        quote: char,
        too_small: fn(String, String) -> CompileError,
        no_start: fn(String, String) -> CompileError,
        no_end: fn(String, String) -> CompileError,
    ) -> Result<String> {
        if value.chars().count() < 2 {
            return Err(too_small(value.to_string(), self.cursor.here()));
        }

        if !value.starts_with(quote) {
            return Err(no_start(value.to_string(), self.cursor.here()));
        }

        if !value.ends_with(quote) {
            return Err(no_end(value.to_string(), self.cursor.here()));
        }

        let inner = &value[quote.len_utf8()..value.len() - quote.len_utf8()];
        Ok(syntax::unescape(inner))
    }

    fn process_char(&mut self, value_type: pool::Type, value: &str) -> Result<()> {
        let unescaped = self.unquote(
            value,
            syntax::CHAR_QUOTE,
            |token, pos| CompileError::CharTooSmallForQuotes { token, pos },
            |token, pos| CompileError::CharNoStartQuote { token, pos },
            |token, pos| CompileError::CharNoEndQuote { token, pos },
        )?;

        let mut chars = unescaped.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => return Err(self.invalid_const(value_type, value)),
        };

        self.data.constants.push(symbol as Word);
        Ok(())
    }

    fn process_string(&mut self, _value_type: pool::Type, value: &str) -> Result<()> {
        let unescaped = self.unquote(
            value,
            syntax::STRING_QUOTE,
            |token, pos| CompileError::StringTooSmallForQuotes { token, pos },
            |token, pos| CompileError::StringNoStartQuote { token, pos },
            |token, pos| CompileError::StringNoEndQuote { token, pos },
        )?;

        for symbol in unescaped.chars() {
            self.data.constants.push(symbol as Word);
        }
        self.data.constants.push(pool::STRING_END);

        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    //                             commands                           //
    ////////////////////////////////////////////////////////////////////

    fn parse_command(&mut self, token: &str) -> Result<Word> {
        let code = Opcode::from_str(token).map_err(|_| CompileError::UnknownCommand {
            token: token.to_string(),
            pos: self.cursor.here(),
        })?;

        if let Some((label, pos)) = self.pending_label.take() {
            self.data
                .labels
                .record_command_label(label, self.data.code.len(), pos);
        }

        let command = match code.format() {
            Format::RM => build_rm(code, self.rm_args()?),
            Format::RR => build_rr(code, self.rr_args()?),
            Format::RI => build_ri(code, self.ri_args()?),
            Format::J => build_j(code, self.j_args()?),
        };

        if let Some(extra) = self.cursor.next_token() {
            return Err(CompileError::ExtraAfterCommand {
                token: extra,
                pos: self.cursor.here(),
            });
        }

        Ok(command)
    }

    fn rm_args(&mut self) -> Result<RmArgs> {
        let reg = match self.cursor.next_token() {
            Some(token) => self.parse_register(&token)?,
            None => {
                return Err(CompileError::RmNoRegister {
                    pos: self.cursor.here(),
                })
            }
        };

        let addr = match self.cursor.next_token() {
            Some(token) => self.parse_address(&token, false)?,
            None => {
                return Err(CompileError::RmNoAddress {
                    pos: self.cursor.here(),
                })
            }
        };

        Ok(RmArgs { reg, addr })
    }

    fn rr_args(&mut self) -> Result<RrArgs> {
        let recv = match self.cursor.next_token() {
            Some(token) => self.parse_register(&token)?,
            None => {
                return Err(CompileError::RrNoReceiver {
                    pos: self.cursor.here(),
                })
            }
        };

        let src = match self.cursor.next_token() {
            Some(token) => self.parse_register(&token)?,
            None => {
                return Err(CompileError::RrNoSource {
                    pos: self.cursor.here(),
                })
            }
        };

        let modifier = match self.cursor.next_token() {
            Some(token) => self.parse_immediate(&token, constants::MOD_SIZE)?,
            None => {
                return Err(CompileError::RrNoModifier {
                    pos: self.cursor.here(),
                })
            }
        };

        Ok(RrArgs {
            recv,
            src,
            modifier,
        })
    }

    fn ri_args(&mut self) -> Result<RiArgs> {
        let reg = match self.cursor.next_token() {
            Some(token) => self.parse_register(&token)?,
            None => {
                return Err(CompileError::RiNoRegister {
                    pos: self.cursor.here(),
                })
            }
        };

        let imm = match self.cursor.next_token() {
            Some(token) => self.parse_immediate(&token, constants::IMM_SIZE)?,
            None => {
                return Err(CompileError::RiNoImmediate {
                    pos: self.cursor.here(),
                })
            }
        };

        Ok(RiArgs { reg, imm })
    }

    fn j_args(&mut self) -> Result<JArgs> {
        let addr = match self.cursor.next_token() {
            Some(token) => self.parse_address(&token, false)?,
            None => {
                return Err(CompileError::JNoAddress {
                    pos: self.cursor.here(),
                })
            }
        };

        Ok(JArgs { addr })
    }

    ////////////////////////////////////////////////////////////////////
    //                             operands                           //
    ////////////////////////////////////////////////////////////////////

    fn parse_register(&self, token: &str) -> Result<Register> {
        karma::instructions::register_from_name(token).map_err(|_| {
            CompileError::UnknownRegister {
                token: token.to_string(),
                pos: self.cursor.here(),
            }
        })
    }

    fn parse_immediate(&self, token: &str, bit_size: u32) -> Result<Immediate> {
        let min = -(1i64 << (bit_size - 1));
        let max = (1i64 << (bit_size - 1)) - 1;

        let value = match int_util::parse_i32(token) {
            IntParse::Value(value) => value,
            IntParse::NotANumber | IntParse::Partial => {
                return Err(CompileError::ImmediateNotANumber {
                    token: token.to_string(),
                    pos: self.cursor.here(),
                })
            }
            IntParse::OutOfRange => {
                return Err(CompileError::ImmediateOutOfRange {
                    token: token.to_string(),
                    pos: self.cursor.here(),
                })
            }
        };

        if i64::from(value) < min {
            return Err(CompileError::ImmediateLessThanMin {
                min: min as i32,
                token: token.to_string(),
                pos: self.cursor.here(),
            });
        }

        if i64::from(value) > max {
            return Err(CompileError::ImmediateMoreThanMax {
                max: max as i32,
                token: token.to_string(),
                pos: self.cursor.here(),
            });
        }

        Ok(value)
    }

    /// Parses an address operand: a non-negative literal, or a label. A
    /// label is recorded as a usage (or as the entrypoint label) and
    /// resolves to zero until substitution.
    fn parse_address(&mut self, token: &str, is_entrypoint: bool) -> Result<Address> {
        match int_util::parse_i32(token) {
            IntParse::Value(value) => {
                if value < 0 {
                    return Err(CompileError::AddressNegative {
                        token: token.to_string(),
                        pos: self.cursor.here(),
                    });
                }

                if value as usize > constants::MEMORY_SIZE {
                    return Err(CompileError::AddressOutOfMemory {
                        token: token.to_string(),
                        pos: self.cursor.here(),
                    });
                }

                Ok(value as Address)
            }

            // a number followed by junk reads as a label that illegally
            // starts with a digit (this also covers "0x"-prefixed junk)
            IntParse::Partial => Err(CompileError::LabelStartsWithDigit {
                label: token.to_string(),
                pos: self.cursor.here(),
            }),

            IntParse::OutOfRange => Err(CompileError::AddressOutOfMemory {
                token: token.to_string(),
                pos: self.cursor.here(),
            }),

            IntParse::NotANumber => {
                Labels::check(token, &self.cursor.here())?;

                if is_entrypoint {
                    self.data.labels.record_entrypoint_label(token.to_string());
                } else {
                    self.data.labels.record_usage(
                        token.to_string(),
                        self.data.code.len(),
                        self.cursor.here(),
                    );
                }

                Ok(0)
            }
        }
    }
}

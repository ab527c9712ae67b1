//! Per-file compilation artifacts and their linking: concatenation of
//! segments, label-table merging, and the final back-patching of address
//! operands.

use karma::exec;
use karma::{constants, Address, Word};

use crate::errors::CompileError;
use crate::labels::Labels;

/// The entrypoint as one file recorded it. A symbolic entrypoint keeps
/// address 0 here and the label in the labels table until substitution.
#[derive(Default, Debug)]
pub struct Entrypoint {
    address: Option<Address>,
    pos: Option<String>,
}

impl Entrypoint {
    pub fn record(&mut self, address: Address, pos: String) {
        self.address = Some(address);
        self.pos = Some(pos);
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn seen(&self) -> bool {
        self.pos.is_some()
    }

    fn merge(&mut self, other: Entrypoint) -> Result<(), CompileError> {
        if let Some(pos) = other.pos {
            if let Some(prev_pos) = &self.pos {
                return Err(CompileError::SecondEntrypoint {
                    pos,
                    prev_pos: prev_pos.clone(),
                });
            }

            self.address = other.address;
            self.pos = Some(pos);
        }

        Ok(())
    }
}

/// Everything the per-file assembler produces for one source file, and,
/// after merging, for the whole program.
#[derive(Default, Debug)]
pub struct FileData {
    pub code: Vec<Word>,
    pub constants: Vec<Word>,
    pub labels: Labels,
    pub entrypoint: Entrypoint,
}

impl FileData {
    /// Appends another file's artifact, shifting its label definitions
    /// and usages by the sizes of the segments merged so far.
    fn merge(&mut self, other: FileData) -> Result<(), CompileError> {
        self.entrypoint.merge(other.entrypoint)?;
        self.labels
            .merge(other.labels, self.code.len(), self.constants.len())?;

        self.code.extend(other.code);
        self.constants.extend(other.constants);

        Ok(())
    }

    pub fn merge_all(all: Vec<FileData>) -> Result<FileData, CompileError> {
        let mut result = FileData::default();

        for data in all {
            result.merge(data)?;
        }

        Ok(result)
    }

    /// Finishes the link: verifies the entrypoint, resolves every label
    /// usage by OR-ing the definition address into the waiting code
    /// word, and produces the runnable image.
    pub fn into_exec_data(mut self) -> Result<exec::Data, CompileError> {
        if self.entrypoint.address().is_none() {
            return Err(CompileError::NoEntrypoint);
        }

        self.labels.set_code_size(self.code.len());

        log::debug!("substituting labels");
        self.substitute_labels()?;

        Ok(exec::Data {
            // verified above; substitution never unsets it
            entrypoint: self.entrypoint.address().unwrap_or(0),
            initial_stack: (constants::MEMORY_SIZE - 1) as Address,
            code: self.code,
            constants: self.constants,
        })
    }

    fn substitute_labels(&mut self) -> Result<(), CompileError> {
        for (label, usages) in self.labels.usages() {
            let definition = match self.labels.try_get_definition(label) {
                Some(definition) => definition as Address,
                None => {
                    return Err(CompileError::UndefinedLabel {
                        label: label.clone(),
                        pos: self.labels.usage_sample(label),
                    })
                }
            };

            for &command_index in usages {
                // the address bits of the waiting command were emitted
                // as zeroes
                self.code[command_index] |= definition;
            }
        }

        if let Some(label) = self.labels.entrypoint_label() {
            let definition = match self.labels.try_get_definition(label) {
                Some(definition) => definition as Address,
                None => {
                    return Err(CompileError::UndefinedLabel {
                        label: label.to_string(),
                        pos: self.entrypoint.pos().unwrap_or_default().to_string(),
                    })
                }
            };

            self.entrypoint.set_address(definition);
        }

        Ok(())
    }
}

//! Synthesized label names for recovered assembly: `main` at the
//! entrypoint, `command_label_N` for other jump and memory-reference
//! targets inside the code, `.constant_N` for constants.

use std::collections::{BTreeSet, HashMap};

use num_traits::FromPrimitive;

use karma::exec;
use karma::instructions::{self, Format, Opcode};
use karma::Address;

use crate::errors::DisassembleError;

pub const MAIN_LABEL: &str = "main";
const COMMAND_LABEL_PREFIX: &str = "command_label_";
const CONSTANT_LABEL_PREFIX: &str = ".constant_";

#[derive(Default)]
pub struct Labels {
    command_labels: HashMap<Address, String>,
    constant_labels: HashMap<Address, String>,
}

impl Labels {
    pub fn new() -> Labels {
        Labels::default()
    }

    /// Names the constant whose first data word sits at `address` and
    /// returns the new label.
    pub fn record_constant_label(&mut self, address: Address) -> String {
        let label = format!("{}{}", CONSTANT_LABEL_PREFIX, self.constant_labels.len() + 1);
        self.constant_labels.insert(address, label.clone());
        label
    }

    /// Collects the target address of every command that can reference
    /// one and assigns the code-space label names in address order.
    pub fn prepare_command_labels(&mut self, data: &exec::Data) -> Result<(), DisassembleError> {
        let code_end = data.code.len() as Address;

        // an ordered set so the numbering follows the code layout
        let mut targets: BTreeSet<Address> = BTreeSet::new();

        for &command in &data.code {
            let raw_code = instructions::opcode_bits(command);
            let code = Opcode::from_u32(raw_code)
                .ok_or(DisassembleError::UnknownCommand(raw_code))?;

            let addr = match code.format() {
                Format::RM => instructions::parse_rm(command).addr,
                // a return carries no meaningful target
                Format::J if code != Opcode::RET => instructions::parse_j(command).addr,
                _ => continue,
            };

            if addr < code_end {
                targets.insert(addr);
            }
        }

        self.command_labels
            .insert(data.entrypoint, MAIN_LABEL.to_string());

        for address in targets {
            if address == data.entrypoint {
                continue;
            }

            // the entrypoint label is already in, so numbering starts at 1
            let label = format!("{}{}", COMMAND_LABEL_PREFIX, self.command_labels.len());
            self.command_labels.insert(address, label);
        }

        Ok(())
    }

    pub fn try_get(&self, address: Address) -> Option<&str> {
        self.constant_labels
            .get(&address)
            .or_else(|| self.command_labels.get(&address))
            .map(String::as_str)
    }

    /// The label to print right before the command at `address`, if any.
    pub fn command_label_at(&self, address: Address) -> Option<&str> {
        self.command_labels.get(&address).map(String::as_str)
    }
}

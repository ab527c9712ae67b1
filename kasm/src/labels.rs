//! Label bookkeeping: definitions in command and constant space, usages
//! with back-references into the emitted code, and the optional
//! entrypoint label.

use std::collections::HashMap;

use crate::errors::CompileError;
use crate::syntax;

/// (definition index, definition position)
type Definition = (usize, String);

#[derive(Default, Debug)]
pub struct Labels {
    command_labels: HashMap<String, Definition>,
    constant_labels: HashMap<String, Definition>,
    entrypoint_label: Option<String>,

    /// label -> indices of the code words whose address bits await it
    usages: HashMap<String, Vec<usize>>,
    /// one representative position per used label, for error reporting
    usage_samples: HashMap<String, String>,

    code_size: usize,
}

impl Labels {
    pub fn new() -> Labels {
        Labels::default()
    }

    /// Validates a label name: non-empty, not starting with a digit, all
    /// characters from the allowed set.
    pub fn check(label: &str, pos: &str) -> Result<(), CompileError> {
        let first = match label.chars().next() {
            Some(first) => first,
            None => {
                return Err(CompileError::EmptyLabel {
                    pos: pos.to_string(),
                })
            }
        };

        if first.is_ascii_digit() {
            return Err(CompileError::LabelStartsWithDigit {
                label: label.to_string(),
                pos: pos.to_string(),
            });
        }

        for symbol in label.chars() {
            if !syntax::is_allowed_label_char(symbol) {
                return Err(CompileError::InvalidLabelCharacter {
                    symbol,
                    label: label.to_string(),
                    pos: pos.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Where `label` was defined, if it was.
    pub fn try_get_pos(&self, label: &str) -> Option<&str> {
        self.command_labels
            .get(label)
            .or_else(|| self.constant_labels.get(label))
            .map(|(_, pos)| pos.as_str())
    }

    /// The runtime address a label resolves to. Constant labels live
    /// after the code segment, so their addresses are only meaningful
    /// once [`set_code_size`](Labels::set_code_size) was called.
    pub fn try_get_definition(&self, label: &str) -> Option<usize> {
        if let Some(&(index, _)) = self.command_labels.get(label) {
            return Some(index);
        }

        if let Some(&(index, _)) = self.constant_labels.get(label) {
            return Some(self.code_size + index);
        }

        None
    }

    pub fn set_code_size(&mut self, code_size: usize) {
        self.code_size = code_size;
    }

    pub fn record_command_label(&mut self, label: String, definition: usize, pos: String) {
        self.command_labels.insert(label, (definition, pos));
    }

    pub fn record_constant_label(&mut self, label: String, definition: usize, pos: String) {
        self.constant_labels.insert(label, (definition, pos));
    }

    pub fn record_entrypoint_label(&mut self, label: String) {
        self.entrypoint_label = Some(label);
    }

    pub fn entrypoint_label(&self) -> Option<&str> {
        self.entrypoint_label.as_deref()
    }

    pub fn record_usage(&mut self, label: String, command_index: usize, pos: String) {
        self.usage_samples.entry(label.clone()).or_insert(pos);
        self.usages.entry(label).or_default().push(command_index);
    }

    pub fn usages(&self) -> &HashMap<String, Vec<usize>> {
        &self.usages
    }

    pub fn usage_sample(&self, label: &str) -> String {
        self.usage_samples.get(label).cloned().unwrap_or_default()
    }

    /// Folds another file's labels into this one. Definition indices are
    /// shifted by the sizes of the already merged segments; usages keep
    /// their per-file code indices shifted the same way.
    pub fn merge(
        &mut self,
        other: Labels,
        code_shift: usize,
        constants_shift: usize,
    ) -> Result<(), CompileError> {
        for (label, (index, pos)) in other.command_labels {
            self.check_not_seen(&label, &pos)?;
            self.command_labels.insert(label, (index + code_shift, pos));
        }

        for (label, (index, pos)) in other.constant_labels {
            self.check_not_seen(&label, &pos)?;
            self.constant_labels
                .insert(label, (index + constants_shift, pos));
        }

        if let Some(label) = other.entrypoint_label {
            self.entrypoint_label = Some(label);
        }

        for (label, indices) in other.usages {
            let shifted = indices.into_iter().map(|index| index + code_shift);
            self.usages.entry(label).or_default().extend(shifted);
        }

        for (label, pos) in other.usage_samples {
            self.usage_samples.entry(label).or_insert(pos);
        }

        Ok(())
    }

    fn check_not_seen(&self, label: &str, pos: &str) -> Result<(), CompileError> {
        match self.try_get_pos(label) {
            Some(prev_pos) => Err(CompileError::LabelRedefinition {
                label: label.to_string(),
                pos: pos.to_string(),
                prev_pos: prev_pos.to_string(),
            }),
            None => Ok(()),
        }
    }
}

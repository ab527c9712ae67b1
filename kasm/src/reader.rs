//! Streaming reader over one source file: logical lines with comments
//! stripped, whitespace-delimited tokens, and trimmed rest-of-line
//! captures for constant values.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::errors::CompileError;
use crate::includes::SourceSet;
use crate::syntax;

pub struct Cursor<'a> {
    files: &'a SourceSet,
    file: usize,
    reader: BufReader<File>,
    line_num: usize,
    line: String,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Opens the file with index `file` of the set.
    pub fn open(files: &'a SourceSet, file: usize) -> Result<Cursor<'a>, CompileError> {
        let path = files.path(file);

        let handle = File::open(path).map_err(|source| CompileError::FailedToOpen {
            path: path.to_owned(),
            source,
        })?;

        Ok(Cursor {
            files,
            file,
            reader: BufReader::new(handle),
            line_num: 0,
            line: String::new(),
            pos: 0,
        })
    }

    /// Advances to the next logical line. Returns `false` at end of file.
    pub fn next_line(&mut self) -> Result<bool, CompileError> {
        self.line.clear();
        self.pos = 0;

        let read = self
            .reader
            .read_line(&mut self.line)
            .map_err(|source| CompileError::Io {
                path: self.files.path(self.file).to_owned(),
                source,
            })?;

        if read == 0 {
            return Ok(false);
        }

        while self.line.ends_with('\n') || self.line.ends_with('\r') {
            self.line.pop();
        }

        trim_comment(&mut self.line);
        self.line_num += 1;

        Ok(true)
    }

    /// The next whitespace-delimited token of the current line.
    pub fn next_token(&mut self) -> Option<String> {
        let rest = &self.line[self.pos..];
        let start = rest.find(|c: char| !c.is_whitespace())?;

        let token_rest = &rest[start..];
        let len = token_rest
            .find(char::is_whitespace)
            .unwrap_or_else(|| token_rest.len());

        self.pos += start + len;

        Some(token_rest[..len].to_string())
    }

    /// The remainder of the current line, trimmed. `None` if nothing but
    /// whitespace remains. Used for constant values, which may contain
    /// spaces.
    pub fn rest_of_line(&mut self) -> Option<String> {
        let rest = self.line[self.pos..].trim();
        self.pos = self.line.len();

        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }

    /// A human-readable position: the line number plus the include chain
    /// up to the root file.
    pub fn here(&self) -> String {
        self.files.where_at(self.file, self.line_num)
    }
}

/// Cuts the line at the first `#` that is not preceded by a backslash.
/// The backslash itself stays in the line; escape resolution happens
/// later, inside quoted values.
fn trim_comment(line: &mut String) {
    let mut previous: Option<char> = None;

    for (index, symbol) in line.char_indices() {
        if symbol == syntax::COMMENT_SEP && previous != Some(syntax::DISABLE_COMMENT_SEP) {
            line.truncate(index);
            return;
        }

        previous = Some(symbol);
    }
}

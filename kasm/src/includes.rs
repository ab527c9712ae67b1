//! Include resolution: from a root file, the ordered set of all
//! transitively included files, root first, in depth-first order of
//! first encounter. A file included twice is kept only at its first
//! position.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::CompileError;
use crate::reader::Cursor;
use crate::syntax;

struct SourceFile {
    path: PathBuf,
    parent: Option<usize>,
}

/// An arena of source files; indices are stable and order is assembly
/// order.
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn path(&self, file: usize) -> &Path {
        &self.files[file].path
    }

    /// A position string listing the include chain from `file` up to the
    /// root.
    pub fn where_at(&self, file: usize, line: usize) -> String {
        let mut result = format!("at line {}\n            in {}", line, self.path(file).display());

        let mut parent = self.files[file].parent;
        while let Some(index) = parent {
            result.push_str(&format!("\n included from {}", self.path(index).display()));
            parent = self.files[index].parent;
        }

        result
    }
}

/// Resolves all includes starting from `root`.
pub fn resolve(root: &Path) -> Result<SourceSet, CompileError> {
    let root = canonicalize(root)?;

    let mut set = SourceSet {
        files: vec![SourceFile {
            path: root,
            parent: None,
        }],
    };

    let mut visited: HashSet<PathBuf> = HashSet::new();
    visited.insert(set.files[0].path.clone());

    process_file(&mut set, &mut visited, 0)?;

    Ok(set)
}

fn canonicalize(path: &Path) -> Result<PathBuf, CompileError> {
    path.canonicalize().map_err(|source| CompileError::FailedToOpen {
        path: path.to_owned(),
        source,
    })
}

/// Scans the include directives of one file and recurses into every
/// newly discovered file, appending it to the arena.
fn process_file(
    set: &mut SourceSet,
    visited: &mut HashSet<PathBuf>,
    file: usize,
) -> Result<(), CompileError> {
    for relative in includes_of(set, file)? {
        // includes resolve relative to the including file's directory
        let resolved = match set.path(file).parent() {
            Some(dir) => dir.join(&relative),
            None => relative.clone(),
        };

        let resolved = canonicalize(&resolved)?;

        if !visited.insert(resolved.clone()) {
            continue;
        }

        set.files.push(SourceFile {
            path: resolved,
            parent: Some(file),
        });

        process_file(set, visited, set.files.len() - 1)?;
    }

    Ok(())
}

/// The include directives at the top of one file, in order. Scanning
/// stops at the first line whose first token is not `include`.
fn includes_of(set: &SourceSet, file: usize) -> Result<Vec<PathBuf>, CompileError> {
    let mut cursor = Cursor::open(set, file)?;
    let mut includes = Vec::new();

    while cursor.next_line()? {
        let token = match cursor.next_token() {
            Some(token) => token,
            None => continue,
        };

        if token != syntax::INCLUDE_DIRECTIVE {
            break;
        }

        match cursor.rest_of_line() {
            Some(filename) => includes.push(PathBuf::from(filename)),
            None => {
                return Err(CompileError::IncludeNoFilename { pos: cursor.here() });
            }
        }
    }

    Ok(includes)
}

//! Diagram loading utilities
//!
//! `DiagramLoader` reads diagram sources from files or strings and hands them to the
//! extractor. Line endings are normalised on the way in, so a drawing saved with
//! `\r\n` produces the same figures as one saved with `\n`. Only a `\r` that ends
//! a row is dropped; one in the middle of a row stays a cell of that row.
//!
//! The module also carries the file chores diagram tools need: listing the diagrams
//! kept in a directory, writing converted output and deleting a diagram.
//!
//! # Example
//!
//! ```rust
//! use asciigram::diagram::loader::DiagramLoader;
//!
//! let diagram = DiagramLoader::from_path("box.txt")?.parse();
//! let diagram = DiagramLoader::from_string("+--+\n|  |\n+--+").parse();
//! ```

use super::Diagram;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error that can occur while reading, listing or writing diagram files
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot list directory {path}: {source}")]
    ListDir { path: PathBuf, source: io::Error },

    #[error("cannot delete {path}: {source}")]
    Delete { path: PathBuf, source: io::Error },
}

/// Replaces `\r\n` with `\n` and drops a `\r` that ends the last row.
pub fn normalize_line_endings(source: &str) -> String {
    let source = source.replace("\r\n", "\n");
    match source.strip_suffix('\r') {
        Some(trimmed) => trimmed.to_string(),
        None => source,
    }
}

/// Diagram source loader
pub struct DiagramLoader {
    source: String,
}

impl DiagramLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "loaded diagram source");
        Ok(Self::from_string(raw))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DiagramLoader {
            source: normalize_line_endings(&source.into()),
        }
    }

    /// The normalised source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Extract the diagram's figures.
    pub fn parse(&self) -> Diagram {
        Diagram::parse(&self.source)
    }
}

/// Names of the diagrams stored in `dir`, sorted. The directory is created when it
/// does not exist yet.
pub fn list_diagrams<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, LoaderError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| LoaderError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let list_error = |source| LoaderError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Writes `contents` to `path`, creating its parent directory if needed.
pub fn save_output<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), LoaderError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoaderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| LoaderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote output");
    Ok(())
}

pub fn delete_diagram<P: AsRef<Path>>(path: P) -> Result<(), LoaderError> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|source| LoaderError::Delete {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "deleted diagram");
    Ok(())
}

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for registry loading.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors produced while tokenizing a single record line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not contain the record marker it was tokenized with.
    #[error("marker `{marker}` not found in line")]
    MarkerNotFound {
        /// The marker that was looked for.
        marker: &'static str,
    },

    /// No token left of the marker decoded as a hexadecimal code point.
    #[error("no code points in `{sequence}`")]
    NoCodePoints {
        /// The trimmed text left of the marker.
        sequence: String,
    },

    /// The comment part carries no symbol token.
    #[error("no symbol after `#` in `{comment}`")]
    MissingSymbol {
        /// The trimmed text right of the marker.
        comment: String,
    },
}

/// Errors produced by the range compactor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Nothing above U+0039 was left to compact.
    #[error("no code points above U+39 to build a unicode-range from")]
    Empty,
}

/// Errors produced while loading a registry file.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry file could not be opened or read.
    #[error("cannot read emoji registry {path}: {source}")]
    Io {
        /// Path of the registry file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened source failed.
    #[error("IO error: {0}")]
    Read(#[from] io::Error),
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}

//! Error types for unit generation.

use std::{io, path::PathBuf, result};

use read_fonts::ReadError;

/// Errors that can occur while generating a unit from a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("failed to write unit {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;

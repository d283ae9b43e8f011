use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read input file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no input files given")]
    NoInput,
}

impl EngineError {
    /// Path of the file the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InputRead { path, .. } | Self::OutputWrite { path, .. } => Some(path),
            Self::NoInput => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

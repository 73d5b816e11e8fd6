use std::{fmt, io};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Which step of a load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Open,
    Read,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "open"),
            Stage::Read => write!(f, "read"),
        }
    }
}

/// The resource could not be loaded.
///
/// Callers are expected to treat every instance the same way, as
/// "resource unavailable". The stage and the underlying I/O error are
/// kept for diagnostics only.
#[derive(Error, Debug)]
#[error("Resource {name} is unavailable ({stage} failed): {source}")]
pub struct ResourceUnavailable {
    name: String,
    stage: Stage,
    #[source]
    source: io::Error,
}

impl ResourceUnavailable {
    pub(crate) fn new(name: &str, stage: Stage, source: io::Error) -> Self {
        Self {
            name: name.to_owned(),
            stage,
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn cause(&self) -> &io::Error {
        &self.source
    }
}

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

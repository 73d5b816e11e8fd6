use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::provider::DirProvider;
use crate::reader::ResourceReader;
use crate::{ReaderError, Result, CHUNK_SIZE, DEFAULT_TAG, MAX_CHUNK_SIZE};

/// Settings for a reader backed by a directory bundle.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "chunk_size": 512, "root": "assets", "include_paths": ["shared"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub chunk_size: usize,
    pub root: PathBuf,
    pub include_paths: Vec<PathBuf>,
    pub tag: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            root: PathBuf::from("."),
            include_paths: Vec::new(),
            tag: DEFAULT_TAG.to_owned(),
        }
    }
}

impl ReaderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ReaderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Loading reader config from {}", path.as_ref().display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ReaderError::Config(
                "chunk_size must be at least 1".to_owned(),
            ));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ReaderError::Config(format!(
                "chunk_size must be at most {}",
                MAX_CHUNK_SIZE
            )));
        }
        if self.tag.is_empty() {
            return Err(ReaderError::Config("tag must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Apply command-line style overrides on top of this config: `root`
    /// and `chunk_size` replace, `include_paths` are searched after the
    /// configured ones.
    pub fn with_overrides<I>(
        mut self,
        root: Option<PathBuf>,
        include_paths: I,
        chunk_size: Option<usize>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        if let Some(root) = root {
            self.root = root;
        }
        self.include_paths.extend(include_paths);
        if let Some(chunk_size) = chunk_size {
            self.chunk_size = chunk_size;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn provider(&self) -> DirProvider {
        DirProvider::new(&self.root).with_include_paths(&self.include_paths)
    }

    pub fn into_reader(self) -> Result<ResourceReader<DirProvider>> {
        self.validate()?;
        Ok(ResourceReader::new(self.provider())
            .with_chunk_size(self.chunk_size)
            .with_tag(self.tag))
    }
}

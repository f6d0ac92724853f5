use std::path::Path;

use crate::error::{CxxGuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::Config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;

    /// Load from `path` when given, otherwise return the built-in defaults.
    ///
    /// # Errors
    /// Returns an error if the given file is missing or cannot be parsed.
    fn load_optional(&self, path: Option<&Path>) -> Result<Config> {
        path.map_or_else(|| Ok(Config::default()), |p| self.load_from_path(p))
    }
}

/// Loads an explicitly named TOML file. No discovery is performed.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let mut config: Config = toml::from_str(content).map_err(CxxGuardError::from)?;
        config.format.normalize();
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(CxxGuardError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CxxGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

mod filter;

pub use filter::{ChangeFilter, FileFilter, SuffixFilter};

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Recursive walk in file-name order.
///
/// A root that is not a directory yields nothing. Entries that cannot be
/// read are skipped.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            debug!(root = %root.display(), "not a directory, skipping");
            return Vec::new();
        }
        WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| debug!(error = %e, "skipping unreadable entry"))
                    .ok()
            })
            .filter(|e| is_file(e) && self.filter.should_include(e.path()))
            .map(DirEntry::into_path)
            .collect()
    }
}

/// Regular files and symlinks to files. Symlinked directories are not entered.
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

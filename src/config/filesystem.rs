use std::path::{Path, PathBuf};

/// The few filesystem queries config discovery needs.
pub trait FileSystem {
    /// # Errors
    /// Returns an error if `path` cannot be read as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for `.bash-guard.toml`.
    ///
    /// # Errors
    /// Returns an error if the working directory is gone or inaccessible.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory holding `config.toml`, e.g. `~/.config/bash-guard`
    /// on Linux. `None` when no home directory can be resolved.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs` and the platform's config location.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bash-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;

use std::path::{Path, PathBuf};

use crate::reference;

/// Directories scanned by default, relative to the root.
pub const DEFAULT_SOURCE_DIRS: &[&str] = &["src/EnergyPlus", "tst/EnergyPlus/unit"];

/// Extensions checked, in output order: sources before headers.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cc", "hh", "h"];

pub const DEFAULT_LICENSE_FILE: &str = "LICENSE.txt";

pub struct CheckerConfig {
    pub root_dir: PathBuf,
    pub source_dirs: Vec<PathBuf>,
    pub license_file: PathBuf,
    pub extensions: Vec<String>,
    pub year: i32,
}

impl CheckerConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            source_dirs: DEFAULT_SOURCE_DIRS.iter().map(|d| root.join(d)).collect(),
            license_file: root.join(DEFAULT_LICENSE_FILE),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            year: reference::current_year(),
        }
    }

    /// Use the invocation directory as root. Relative paths in the scan resolve against it.
    pub fn from_current_dir() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_root(&cwd))
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Replace the scanned directories. Relative entries are joined onto the root.
    pub fn with_source_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.source_dirs = dirs.into_iter().map(|d| self.root_dir.join(d)).collect();
        self
    }

    pub fn with_license_file(mut self, path: &Path) -> Self {
        self.license_file = self.root_dir.join(path);
        self
    }

    /// Path as shown in diagnostics: relative to the root, `/`-separated.
    pub fn display_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root_dir).unwrap_or(path);
        rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/")
    }
}

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait Environment {
    fn now(&self) -> DateTime<Local>;

    fn current_dir(&self) -> Result<PathBuf>;

    // Sorted names of immediate entries; one unreadable entry fails the call.
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("failed to read current working directory")
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>> {
        debug!("Listing directory: {:?}", path);

        let mut names = Vec::new();
        for entry in fs::read_dir(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?
        {
            let entry = entry
                .with_context(|| format!("failed to read entry in {}", path.display()))?;
            names.push(entry.file_name());
        }
        names.sort();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_files_and_subdirectories_without_recursing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.txt"), "x").unwrap();

        let names = SystemEnvironment::new().list_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt", "nested"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = SystemEnvironment::new().list_dir(&missing).unwrap_err();
        assert!(err.to_string().contains("failed to read directory"));
    }
}

//! File system access behind a narrow trait
//!
//! Every component that touches the disk takes a `&dyn FileSystem` so tests can
//! substitute a recording fake. [`LocalFileSystem`] is the live implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The file system operations the generator actually uses
pub trait FileSystem: Send + Sync {
    /// Working directory of the running process
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Non-hidden entries of a directory, sorted by file name
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Whether `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Raw contents of a file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the contents of a file, creating it if needed
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create a directory and its parents; an existing directory is not an error
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if is_hidden(&entry.file_name().to_string_lossy()) {
                continue;
            }
            entries.push(entry.path());
        }
        entries.sort();
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// Last path component as an owned string, or an empty string for `/` and `..`
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

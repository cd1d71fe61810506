//! Key/value storage backends for persisted records

use directories::ProjectDirs;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// String storage addressed by a fixed key
pub trait StatsStorage {
    /// Read the value stored under `key`, `None` if nothing was stored yet
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend cannot be read.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Delete the value stored under `key`; missing keys are not an error
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend cannot be modified.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use the platform's local data directory, or the working directory if none exists
    #[must_use]
    pub fn new() -> Self {
        let dir = ProjectDirs::from("", "", "word_garden")
            .map_or_else(|| PathBuf::from("."), |pd| pd.data_local_dir().to_path_buf());
        Self { dir }
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsStorage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory storage; can simulate an unavailable backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage where every operation fails, like a browser with storage disabled
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            entries: FxHashMap::default(),
            unavailable: true,
        }
    }

    /// Preload a raw value under `key`
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check(&self) -> io::Result<()> {
        if self.unavailable {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage unavailable",
            ))
        } else {
            Ok(())
        }
    }
}

impl StatsStorage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }
}

//! Session stores: read on init, whole-value write on commit.

use super::record::{decode_session, encode_session};
use crate::core::constants::{DATA_DIR_NAME, STORAGE_KEY};
use crate::core::error::{GachaError, Result};
use crate::core::session::Session;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a Session lives between runs.
///
/// `load` returns `Ok(None)` when nothing is stored and
/// `Err(CorruptPersistedState)` when something is stored but unreadable.
pub trait SessionStore {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&mut self, session: &Session) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// Get the ~/.gacha/ directory path, creating it if needed.
pub fn default_data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// One JSON file per data directory, named after the storage key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store under `~/.gacha/`.
    pub fn new() -> io::Result<Self> {
        Self::in_dir(&default_data_dir()?)
    }

    pub fn in_dir(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<Session>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                // Not UTF-8: treat like any other unreadable record.
                return Err(GachaError::CorruptPersistedState(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        decode_session(&json).map(Some)
    }

    /// Writes a sibling temp file, then renames it over the record so a
    /// crash leaves either the old or the new Session, never a mix.
    fn save(&mut self, session: &Session) -> Result<()> {
        let json = encode_session(session)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the encoded record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with arbitrary stored text.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>> {
        self.raw.as_deref().map(decode_session).transpose()
    }

    fn save(&mut self, session: &Session) -> Result<()> {
        self.raw = Some(encode_session(session)?);
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.raw = None;
        Ok(())
    }
}

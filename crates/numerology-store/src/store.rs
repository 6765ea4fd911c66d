use std::path::{Path, PathBuf};
use std::{env, fs};

use rusqlite::{Connection, OptionalExtension, params};

use numerology_core::{expression_number, life_path_number};

use crate::error::{Result, StoreError};
use crate::schema;

const BIRTH_DATE_KEY: &str = "saved_birth_date";
const NAME_KEY: &str = "saved_name";
const DB_FILE: &str = "profile.db";

/// Default base directory for all numerology storage.
pub fn default_base_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".numerology")
}

/// The inputs a caller last chose to remember.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedInputs {
    pub birth_date: Option<String>,
    pub name: Option<String>,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Open `profile.db` under `base_dir`, or under [`default_base_dir`].
    pub fn open_in(base_dir: Option<&Path>) -> Result<Self> {
        let base = base_dir.map(Path::to_path_buf).unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base)?;
        let path = base.join(DB_FILE);
        tracing::debug!("opening profile store at {}", path.display());
        Self::open(&path)
    }

    /// Like [`Store::open_in`], but returns `None` without touching the
    /// filesystem when no `profile.db` exists yet.
    pub fn open_existing_in(base_dir: Option<&Path>) -> Result<Option<Self>> {
        let base = base_dir.map(Path::to_path_buf).unwrap_or_else(default_base_dir);
        let path = base.join(DB_FILE);
        if !path.exists() {
            tracing::debug!("no profile store at {}", path.display());
            return Ok(None);
        }
        Self::open(&path).map(Some)
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM metadata WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(result)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // --- Remembered inputs ---

    /// Remember a birth date. Only dates the life-path calculator accepts are stored.
    pub fn save_birth_date(&self, date: &str) -> Result<()> {
        let date = date.trim();
        if life_path_number(date).is_none() {
            return Err(StoreError::InvalidData(format!(
                "not a year-month-day date: {date:?}"
            )));
        }
        self.set_metadata(BIRTH_DATE_KEY, date)?;
        tracing::info!("remembered birth date");
        Ok(())
    }

    /// Remember a name. Names with no countable letters are rejected.
    pub fn save_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        match expression_number(name) {
            Some(n) if n > 0 => {}
            _ => {
                return Err(StoreError::InvalidData(format!(
                    "name has no countable letters: {name:?}"
                )));
            }
        }
        self.set_metadata(NAME_KEY, name)?;
        tracing::info!("remembered name");
        Ok(())
    }

    pub fn saved_inputs(&self) -> Result<SavedInputs> {
        Ok(SavedInputs {
            birth_date: self.get_metadata(BIRTH_DATE_KEY)?,
            name: self.get_metadata(NAME_KEY)?,
        })
    }

    /// Forget both remembered inputs.
    pub fn clear_inputs(&self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM metadata WHERE key IN (?1, ?2)",
            params![BIRTH_DATE_KEY, NAME_KEY],
        )?;
        Ok(())
    }
}

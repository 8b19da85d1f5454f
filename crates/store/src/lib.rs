//! pintext-store: the saved-selection persistence gateway.
//!
//! Hosts let users save the currently selected span of text under a
//! name and reload it later. This crate owns that persistence: a JSON
//! array of records on disk, loaded tolerantly and written atomically.
//! The engine never touches this format; it only ever sees
//! [`SavedSelection`] values passing through the gateway's
//! save/load/update/delete operations.
//!
//! ## File Location
//!
//! The store file lives in the platform config directory:
//! - Linux: `~/.config/pintext/selections.json`
//! - macOS: `~/Library/Application Support/pintext/selections.json`
//!
//! ## Degradation
//!
//! Loading never fails the caller. A malformed array entry is skipped
//! (logged) and the rest of the list is returned; a missing or wholly
//! unparsable file loads as an empty list. Records missing `id` or
//! `timestamp` get the current time for both at load.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Application name used for the config directory.
const APP_NAME: &str = "pintext";

/// Store file name.
const STORE_FILENAME: &str = "selections.json";

/// One saved selection: a named span of text captured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSelection {
    /// Gateway-assigned identifier, unique within the store.
    pub id: i64,
    /// Display name, defaulted from the text when the user gives none.
    pub name: String,
    /// The saved text itself.
    pub text: String,
    /// Milliseconds since the Unix epoch at save time.
    pub timestamp: i64,
}

/// Wire-tolerant form of a record: `id` and `timestamp` may be absent
/// in older or hand-edited stores and default to load time.
#[derive(Debug, Deserialize)]
struct SavedSelectionData {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    text: String,
    #[serde(default)]
    timestamp: Option<i64>,
}

/// Derives a display name from saved text: the first 50 characters,
/// newlines flattened, first five space-separated tokens joined.
/// Consecutive spaces yield empty tokens, so interior spacing carries
/// through to the name.
pub fn default_name(text: &str) -> String {
    let head: String = text.chars().take(50).collect();
    head.replace('\n', " ")
        .split(' ')
        .take(5)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Returns the path to the store file, creating the config directory
/// if needed. Returns None (logged) when the platform config directory
/// cannot be determined or created.
pub fn store_file_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    let app_dir = config_dir.join(APP_NAME);

    if let Err(e) = fs::create_dir_all(&app_dir) {
        eprintln!("Failed to create store directory {:?}: {}", app_dir, e);
        return None;
    }

    Some(app_dir.join(STORE_FILENAME))
}

/// Parses the raw store contents, skipping malformed entries.
fn parse_entries(contents: &str) -> Vec<SavedSelection> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(contents) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to parse selection store: {}", e);
            return Vec::new();
        }
    };

    let loaded_at = now_ms();
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<SavedSelectionData>(value) {
            Ok(data) => Some(SavedSelection {
                id: data.id.unwrap_or(loaded_at),
                name: data.name,
                text: data.text,
                timestamp: data.timestamp.unwrap_or(loaded_at),
            }),
            Err(e) => {
                eprintln!("Skipping malformed saved selection: {}", e);
                None
            }
        })
        .collect()
}

/// The persistence gateway over one store file.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    /// Opens the store at the platform default location.
    pub fn open_default() -> Option<Self> {
        store_file_path().map(|path| Self { path })
    }

    /// Opens a store at an explicit path (tests, portable setups).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads all saved selections in stored order.
    ///
    /// Never fails: a missing file is an empty store, unreadable or
    /// unparsable contents degrade to an empty list, and malformed
    /// entries are skipped individually.
    pub fn load(&self) -> Vec<SavedSelection> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read selection store: {}", e);
                return Vec::new();
            }
        };

        parse_entries(&contents)
    }

    /// Saves a new selection and returns the stored record.
    ///
    /// The gateway assigns the id (current time in milliseconds, bumped
    /// past any collision) and the timestamp. An empty or blank name
    /// falls back to [`default_name`].
    pub fn save(&self, name: &str, text: &str) -> io::Result<SavedSelection> {
        let mut selections = self.load();

        let now = now_ms();
        let mut id = now;
        while selections.iter().any(|s| s.id == id) {
            id += 1;
        }

        let name = if name.trim().is_empty() {
            default_name(text)
        } else {
            name.to_string()
        };

        let selection = SavedSelection {
            id,
            name,
            text: text.to_string(),
            timestamp: now,
        };
        selections.push(selection.clone());
        self.write_all(&selections)?;
        Ok(selection)
    }

    /// Replaces the stored record with the same id.
    ///
    /// Returns false (without touching the file) when no record has
    /// that id.
    pub fn update(&self, selection: &SavedSelection) -> io::Result<bool> {
        let mut selections = self.load();
        match selections.iter_mut().find(|s| s.id == selection.id) {
            Some(slot) => {
                *slot = selection.clone();
                self.write_all(&selections)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Deletes the record with the given id.
    ///
    /// Returns false (without touching the file) when no record has
    /// that id.
    pub fn delete(&self, id: i64) -> io::Result<bool> {
        let mut selections = self.load();
        let before = selections.len();
        selections.retain(|s| s.id != id);
        if selections.len() == before {
            return Ok(false);
        }
        self.write_all(&selections)?;
        Ok(true)
    }

    /// Writes the full list atomically: write to a temp file, then
    /// rename over the store file.
    fn write_all(&self, selections: &[SavedSelection]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(selections)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

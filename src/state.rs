use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::contact::Contact;

const STATE_DIR: &str = ".rolodex";
const CONTACTS_FILE: &str = "contacts.json";
// Maximum allowed size for state files (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
const MAX_ITEMS: usize = 10_000;

// Trait for items that can be persisted
pub trait Persistent: Sized + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
}

impl Persistent for Contact {
    fn filename() -> &'static str {
        CONTACTS_FILE
    }
}

pub struct StateManager {
    state_dir: PathBuf,
}

impl StateManager {
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Self::with_dir(home_dir.join(STATE_DIR))
    }

    /// Use an explicit state directory instead of `~/.rolodex`.
    pub fn with_dir(state_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&state_dir)?;
        Ok(Self { state_dir })
    }

    pub fn load<T: Persistent>(&self) -> Result<Vec<T>> {
        let path = self.state_dir.join(T::filename());
        if !path.exists() {
            return Ok(Vec::new());
        }

        // Check file size before loading
        let metadata = std::fs::metadata(&path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(anyhow!("File size exceeds security limits"));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let json_value: serde_json::Value =
            serde_json::from_reader(reader).map_err(|e| anyhow!("Failed to parse JSON data: {}", e))?;

        if let Some(array) = json_value.as_array() {
            if array.len() > MAX_ITEMS {
                return Err(anyhow!("Too many items in file (maximum {})", MAX_ITEMS));
            }
        }

        let items: Vec<T> = serde_json::from_value(json_value)
            .map_err(|e| anyhow!("Failed to deserialize data: {}", e))?;

        Ok(items)
    }

    pub fn save<T: Persistent>(&self, items: &[T]) -> Result<()> {
        let path = self.state_dir.join(T::filename());
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)?;
        Ok(())
    }

    pub fn add<T: Persistent>(&self, item: T) -> Result<()> {
        let mut items = self.load::<T>()?;
        items.push(item);
        self.save(&items)
    }
}

// Convenience functions used by the command handlers
pub fn load_contacts() -> Result<Vec<Contact>> {
    StateManager::new()?.load()
}

pub fn save_contacts(contacts: &[Contact]) -> Result<()> {
    StateManager::new()?.save(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_contact_state_round_trip() -> Result<()> {
        let temp_dir = tempdir()?;
        let manager = StateManager::with_dir(temp_dir.path().to_path_buf())?;

        let mut contact = Contact::new("Alice Chen");
        contact.phone = Some("555-0100".to_string());
        contact.appointment = Some("2023-12-31 14:30".parse().unwrap());
        manager.add(contact)?;

        let contacts: Vec<Contact> = manager.load()?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Alice Chen");
        assert_eq!(contacts[0].appointment.unwrap().to_string(), "2023-12-31 14:30");

        Ok(())
    }

    #[test]
    fn test_missing_file_loads_empty() -> Result<()> {
        let temp_dir = tempdir()?;
        let manager = StateManager::with_dir(temp_dir.path().to_path_buf())?;

        let contacts: Vec<Contact> = manager.load()?;
        assert!(contacts.is_empty());

        Ok(())
    }

    #[test]
    fn test_save_overwrites_previous_state() -> Result<()> {
        let temp_dir = tempdir()?;
        let manager = StateManager::with_dir(temp_dir.path().to_path_buf())?;

        manager.save(&[Contact::new("Alice"), Contact::new("Bob")])?;
        manager.save(&[Contact::new("Carol")])?;

        let contacts: Vec<Contact> = manager.load()?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Carol");

        Ok(())
    }
}

//! Small key/value persistence for values remembered between runs.
//!
//! The engine never touches storage; commands take a [`KeyValueStore`] so
//! the file-backed store can be swapped for [`MemoryStore`] in tests.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key under which the last budget income is stored.
pub const INCOME_KEY: &str = "income";

/// Environment variable overriding the state file location.
pub const STATE_ENV: &str = "FINCALC_STATE";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error>>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// A flat JSON object on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$FINCALC_STATE`, else `~/.fincalc/state.json`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = std::env::var_os(STATE_ENV) {
            return Ok(Self::new(PathBuf::from(path)));
        }
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .ok_or_else(|| format!("cannot locate home directory; set {STATE_ENV}"))?;
        Ok(Self::new(
            PathBuf::from(home).join(".fincalc").join("state.json"),
        ))
    }

    fn load(&self) -> Result<Map<String, Value>, Box<dyn std::error::Error>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read '{}': {}", self.path.display(), e))?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", self.path.display(), e))?
        {
            Value::Object(map) => Ok(map),
            _ => Err(format!("'{}' is not a JSON object", self.path.display()).into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let map = self.load()?;
        Ok(map.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)
            .map_err(|e| format!("Failed to write '{}': {}", self.path.display(), e))?;
        tracing::debug!(path = %self.path.display(), key, "saved state");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

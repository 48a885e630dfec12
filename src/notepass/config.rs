use crate::error::{NotepassError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "NOTEPASS_CONFIG_DIR";
const DEFAULT_PROMPT: &str = "notepass> ";

/// Keys accepted by `notepass config`, in display order.
pub const CONFIG_KEYS: &[&str] = &["prompt", "mask-passwords", "show-listing-after-change"];

/// Session preferences, stored as `config.json` in the config directory.
///
/// Only preferences live here. Notes and passwords are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotepassConfig {
    /// Prompt shown before each command in an interactive session
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Hide typed passwords when reading from a terminal
    #[serde(default = "default_true")]
    pub mask_passwords: bool,

    /// Print the note listing after a note is added or deleted
    #[serde(default = "default_true")]
    pub show_listing_after_change: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for NotepassConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            mask_passwords: true,
            show_listing_after_change: true,
        }
    }
}

/// Directory holding `config.json`: `$NOTEPASS_CONFIG_DIR` if set, otherwise the
/// platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "notepass", "notepass")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotepassError::Config("could not determine config directory".into()))
}

impl NotepassConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "prompt" => Some(self.prompt.clone()),
            "mask-passwords" => Some(self.mask_passwords.to_string()),
            "show-listing-after-change" => Some(self.show_listing_after_change.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "prompt" => self.prompt = value.to_string(),
            "mask-passwords" => self.mask_passwords = parse_bool(key, value)?,
            "show-listing-after-change" => {
                self.show_listing_after_change = parse_bool(key, value)?
            }
            _ => return Err(NotepassError::UnknownConfigKey(key.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs for every known key.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(NotepassError::Config(format!(
            "{} expects true or false, got \"{}\"",
            key, value
        ))),
    }
}

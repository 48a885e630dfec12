use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotepassConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = NotepassConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => Ok(CmdResult::default().with_message(CmdMessage::info(val))),
            None => Ok(CmdResult::default()
                .with_message(CmdMessage::error(format!("Unknown config key: {}", key)))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val)))
                .with_config(config))
        }
    }
}

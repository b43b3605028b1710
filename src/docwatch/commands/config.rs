use crate::commands::{CmdMessage, CmdResult};
use crate::config::DocwatchConfig;
use crate::error::{DocwatchError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json` in `data_dir`.
///
/// Unknown keys and unparsable values are reported as error messages; only
/// I/O and a malformed config file fail the command.
pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DocwatchConfig::load(data_dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config.lookup(&key).map(CmdMessage::info),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(data_dir)?;
                tracing::info!(%key, "config updated");
                config
                    .lookup(&key)
                    .map(|shown| CmdMessage::success(format!("{} set to {}", key, shown)))
            }
            Err(e) => Err(e),
        },
    };

    let mut result = CmdResult::default();
    result.add_message(message.unwrap_or_else(|e| match e {
        DocwatchError::Config(reason) => CmdMessage::error(reason),
        other => CmdMessage::error(other.to_string()),
    }));
    Ok(result.with_config(config))
}

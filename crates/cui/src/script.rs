use memoria_core::GameConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SCRIPT_SCHEMA_VERSION: u32 = 1;

/// One recorded input. `card`, `pairs` and `millis` are only meaningful
/// for the action kinds that need them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedAction {
    pub action: String,
    #[serde(default)]
    pub card: Option<u32>,
    #[serde(default)]
    pub pairs: Option<usize>,
    #[serde(default)]
    pub millis: Option<u64>,
}

/// Deterministic replay: a seed, a pair count and an ordered action list.
/// Applied on top of a fresh session, it reproduces a whole play-through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionScript {
    pub version: u32,
    pub seed: u64,
    pub pairs: usize,
    pub actions: Vec<ScriptedAction>,
}

pub fn load_script_file(path: &Path) -> Result<ActionScript, String> {
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let script: ActionScript = serde_json::from_str(&body).map_err(|err| err.to_string())?;
    if script.version != SCRIPT_SCHEMA_VERSION {
        return Err(format!(
            "unsupported script version {} (expected {})",
            script.version, SCRIPT_SCHEMA_VERSION
        ));
    }
    Ok(script)
}

pub fn save_script_file(script: &ActionScript, path: &Path) -> Result<(), String> {
    let body = serde_json::to_string_pretty(script).map_err(|err| err.to_string())?;
    fs::write(path, body).map_err(|err| err.to_string())
}

pub fn load_config_file(path: &Path) -> Result<GameConfig, String> {
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let config: GameConfig = serde_json::from_str(&body).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. Explicit override passed by the caller (tests, embedding applications)
//! 2. `--config-dir` CLI argument (registered via [`init_cli_override`])
//! 3. `ICED_KIT_CONFIG_DIR` environment variable (if set and non-empty)
//! 4. Platform config directory with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedKit";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_KIT_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` CLI value. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

/// Returns the config directory using the default resolution order.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, giving `override_path` the highest priority.
///
/// Returns `None` only when no platform config directory can be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

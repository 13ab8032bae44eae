//! Static typed configuration.
//!
//! The schema is an explicit field table with defaults and validation,
//! loaded from a plain JSON file (`~/.rembar.json` or `--config`). Nothing
//! is executed at load time, and there is no global configuration state:
//! the loaded value is merged under the command-line flags and passed
//! explicitly into rendering.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REMIND: &str = "/usr/bin/remind";
pub const DEFAULT_AGENDA_START: u32 = 6;
pub const DEFAULT_AGENDA_END: u32 = 22;
pub const DEFAULT_DAYS: u32 = 1;
pub const DEFAULT_VIEW: &str = "fd";

/// Name of the per-user config file, looked up under `$HOME`.
const CONFIG_FILE: &str = ".rembar.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the remind binary.
    pub remind: String,
    /// Hour the day's agenda starts.
    pub agenda_start_hour: u32,
    /// Hour the day's agenda ends.
    pub agenda_end_hour: u32,
    /// Number of days to display.
    pub days: u32,
    /// View parts, in display order: `f` free/busy bars, `d` daily agendas.
    pub view: String,
    /// Strip the leading zero from clock times and wrap ruler hours past 12.
    pub twelve_hour: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remind: DEFAULT_REMIND.to_string(),
            agenda_start_hour: DEFAULT_AGENDA_START,
            agenda_end_hour: DEFAULT_AGENDA_END,
            days: DEFAULT_DAYS,
            view: DEFAULT_VIEW.to_string(),
            twelve_hour: false,
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// The per-user config when `~/.rembar.json` exists, built-in defaults
    /// otherwise.
    pub fn load_default() -> Result<Self> {
        match std::env::var_os("HOME").map(PathBuf::from) {
            Some(home) => {
                let path = home.join(CONFIG_FILE);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject values no render could honor. Run again after command-line
    /// flags have been merged in.
    pub fn validate(&self) -> Result<()> {
        if self.agenda_start_hour >= self.agenda_end_hour || self.agenda_end_hour > 24 {
            bail!(
                "agenda window {}..{} is invalid: start hour must be below end hour, end at most 24",
                self.agenda_start_hour,
                self.agenda_end_hour
            );
        }
        if self.view.is_empty() || !self.view.chars().all(|c| matches!(c, 'f' | 'd')) {
            bail!(
                "view '{}' is invalid: use 'f' (free/busy) and/or 'd' (daily agenda)",
                self.view
            );
        }
        if self.days == 0 {
            bail!("days must be at least 1");
        }
        Ok(())
    }
}

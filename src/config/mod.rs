// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The file only
//! holds display preferences, favourites are never written to it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Tab, error::SetupError};

pub(crate) const CONFIG_NAME: &str = "movieapp";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub start_tab: Tab,
    pub expand_details: bool,
    pub tick_rate_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            start_tab: Tab::Home,
            expand_details: false,
            tick_rate_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

/// Loads the configuration, falling back to the defaults if the file cannot
/// be read or parsed.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Result<PathBuf, SetupError> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    path.parent()
        .map(PathBuf::from)
        .ok_or(SetupError::NoConfigDir(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.start_tab, Tab::Home);
        assert!(!config.expand_details);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_level, "info");
    }
}

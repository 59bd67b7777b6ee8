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
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "vidplay";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Catalog file to load, the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Prompt shown before each command in interactive mode.
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_path: None,
            prompt: "> ".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_builtin_catalog() {
        let config = AppConfig::default();

        assert_eq!(config.version, 1);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn config_file_round_trips_through_confy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vidplay.toml");
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/srv/videos.txt")),
            ..Default::default()
        };

        confy::store_path(&path, &config).unwrap();
        let loaded: AppConfig = confy::load_path(&path).unwrap();

        assert_eq!(loaded, config);
    }
}

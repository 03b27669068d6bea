/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use connector::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_SERVER: &str = "http://localhost:8000";

#[derive(Clone, Copy, Debug, EnumIter, EnumString, Display, Hash, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConfigKey {
    AuthToken,
    Server,
}

/// Contents of `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authtoken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).context("Failed to create configuration directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write configuration file {}", path.display()))
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::AuthToken => self.authtoken.as_deref(),
            ConfigKey::Server => self.server.as_deref(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: Option<String>) {
        let value = value.filter(|value| !value.trim().is_empty());

        match key {
            ConfigKey::AuthToken => self.authtoken = value,
            ConfigKey::Server => self.server = value.map(|v| v.trim_end_matches('/').to_string()),
        }
    }

    pub fn server_url(&self) -> &str {
        self.server.as_deref().unwrap_or(DEFAULT_SERVER)
    }
}

/// `$JOBBOARD_CONFIG`, or `<config dir>/jobboard/config.toml`.
pub fn config_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os("JOBBOARD_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let mut config_dir = dirs::config_dir().context("Could not find configuration directory")?;
    config_dir.push("jobboard");
    config_dir.push("config.toml");
    Ok(config_dir)
}

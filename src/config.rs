// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Budgetdesk", "budgetdesk"));

pub const DEFAULT_API_URL: &str = "http://localhost:4003";
pub const API_URL_ENV: &str = "BUDGETDESK_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads settings from `path`; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("Read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config {}", path.display()))
}

/// Flag beats environment beats file beats default.
pub fn resolve(flag: Option<&str>, env: Option<String>, file: Settings) -> Settings {
    if let Some(url) = flag {
        return Settings {
            api_url: url.to_string(),
        };
    }
    if let Some(url) = env.filter(|s| !s.trim().is_empty()) {
        return Settings { api_url: url };
    }
    file
}

pub fn load(flag: Option<&str>) -> Result<Settings> {
    let file = load_from(&config_path()?)?;
    Ok(resolve(flag, std::env::var(API_URL_ENV).ok(), file))
}

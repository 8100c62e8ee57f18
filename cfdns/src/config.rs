//! Settings file loader
//!
//! Reads `~/.config/cloudflare/config.ini`:
//!
//! ```ini
//! [DEFAULT]
//! Token = <api token>
//! Domain = example.com
//! ```
//!
//! Section and key names are matched case-insensitively, as INI readers usually do.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use ::config::{File, FileFormat};
use cfdns_provider::log_sanitizer::mask_secret;
use cfdns_provider::normalize_domain_name;

use crate::error::{AppError, AppResult};

const SECTION: &str = "DEFAULT";
const TOKEN_KEY: &str = "Token";
const DOMAIN_KEY: &str = "Domain";

/// 获取默认配置文件路径
pub fn default_config_path() -> AppResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".config").join("cloudflare").join("config.ini"))
        .ok_or_else(|| {
            AppError::configuration(
                "~/.config/cloudflare/config.ini",
                "cannot determine the home directory",
            )
        })
}

/// Persisted settings: credential and managed domain.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub domain: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &mask_secret(&self.token))
            .field("domain", &self.domain)
            .finish()
    }
}

impl Config {
    /// Load settings from `path`.
    ///
    /// Fails with [`AppError::Configuration`] when the file is missing, is not valid
    /// INI, or lacks a non-empty `Token`/`Domain` in its `[DEFAULT]` section.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.is_file() {
            return Err(AppError::configuration(path, "config file doesn't exist"));
        }

        let sections: HashMap<String, HashMap<String, String>> = ::config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()
            .and_then(|raw| raw.try_deserialize())
            .map_err(|e| AppError::configuration(path, e.to_string()))?;

        let section = lookup(&sections, SECTION).ok_or_else(|| {
            AppError::configuration(path, format!("missing [{SECTION}] section"))
        })?;

        let token = required_field(section, TOKEN_KEY, path)?;
        let domain = normalize_domain_name(&required_field(section, DOMAIN_KEY, path)?);

        tracing::debug!("Loaded config from {}", path.display());
        Ok(Self { token, domain })
    }
}

fn lookup<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Option<&'a V> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

/// 获取必填字段并校验非空
fn required_field(
    section: &HashMap<String, String>,
    key: &str,
    path: &Path,
) -> AppResult<String> {
    match lookup(section, key) {
        None => Err(AppError::configuration(
            path,
            format!("missing key '{key}' in [{SECTION}]"),
        )),
        Some(v) if v.trim().is_empty() => Err(AppError::configuration(
            path,
            format!("key '{key}' in [{SECTION}] is empty"),
        )),
        Some(v) => Ok(v.trim().to_string()),
    }
}

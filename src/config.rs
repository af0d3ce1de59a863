// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application, and loads the [`SiteConfig`] that the home
//! page displays. Configuration is resolved once at startup and is read-only
//! afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SITE_CONFIG` | Path of the TOML site configuration | `site.toml` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//!
//! ## Slot Overrides
//!
//! Values from the file can be overridden per deployment slot through the
//! environment, using the hosting platform's prefixes:
//!
//! - `APPSETTING_<key>` sets application setting `<key>`.
//! - `SQLCONNSTR_<name>`, `SQLAZURECONNSTR_<name>`, `MYSQLCONNSTR_<name>`,
//!   `POSTGRESQLCONNSTR_<name>` and `CUSTOMCONNSTR_<name>` set connection
//!   string `<name>`.

use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::ConfigError,
    settings::{AppSettings, ConnectionStringRegistry, ConnectionStrings, SettingsSource},
};

pub const HOST_ENV: &str = "HOST";
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable name for the site configuration file path.
///
/// When unset, [`DEFAULT_SITE_CONFIG`] is used if it exists; otherwise the
/// site starts with an empty configuration and relies on slot overrides.
pub const SITE_CONFIG_ENV: &str = "SITE_CONFIG";
pub const DEFAULT_SITE_CONFIG: &str = "site.toml";

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

pub const APP_SETTING_PREFIX: &str = "APPSETTING_";

pub const CONNECTION_STRING_PREFIXES: [&str; 5] = [
    "SQLCONNSTR_",
    "SQLAZURECONNSTR_",
    "MYSQLCONNSTR_",
    "POSTGRESQLCONNSTR_",
    "CUSTOMCONNSTR_",
];

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    EnvironmentOnly,
}

/// Process-wide site configuration: application settings plus connection
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub app_settings: AppSettings,
    pub connection_strings: ConnectionStrings,
}

impl SiteConfig {
    pub fn new(app_settings: AppSettings, connection_strings: ConnectionStrings) -> Self {
        Self {
            app_settings,
            connection_strings,
        }
    }

    pub fn from_toml(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &raw)
    }

    /// Resolve the configuration from `SITE_CONFIG` (or the default file)
    /// and apply slot overrides from the process environment.
    pub fn from_env() -> Result<(Self, ConfigSource), ConfigError> {
        Self::resolve(
            env::var_os(SITE_CONFIG_ENV).map(PathBuf::from),
            Path::new(DEFAULT_SITE_CONFIG),
            env::vars_os().filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            }),
        )
    }

    /// Load `explicit` if given, otherwise `default_path` when it exists,
    /// otherwise start empty. Overrides from `vars` are applied last.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn resolve<I>(
        explicit: Option<PathBuf>,
        default_path: &Path,
        vars: I,
    ) -> Result<(Self, ConfigSource), ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let (mut config, source) = match explicit {
            Some(path) => (Self::load(&path)?, ConfigSource::File(path)),
            None if default_path.is_file() => (
                Self::load(default_path)?,
                ConfigSource::File(default_path.to_path_buf()),
            ),
            None => (Self::default(), ConfigSource::EnvironmentOnly),
        };

        let overrides = config.apply_overrides(vars);
        if overrides > 0 {
            tracing::info!(count = overrides, "Applied slot overrides from environment");
        }

        Ok((config, source))
    }

    /// Apply `APPSETTING_*` and connection string prefixed variables.
    ///
    /// When one connection string name arrives under several prefixes, the
    /// prefix listed first in [`CONNECTION_STRING_PREFIXES`] wins regardless
    /// of the order of `vars`. Returns the number of entries set.
    pub fn apply_overrides<I>(&mut self, vars: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut applied = 0;
        let mut connections: BTreeMap<String, (usize, String)> = BTreeMap::new();

        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(APP_SETTING_PREFIX) {
                if !name.is_empty() {
                    self.app_settings.insert(name, value);
                    applied += 1;
                }
                continue;
            }
            let matched = CONNECTION_STRING_PREFIXES
                .iter()
                .enumerate()
                .find_map(|(rank, prefix)| key.strip_prefix(prefix).map(|name| (rank, name)));
            let Some((rank, name)) = matched.filter(|(_, name)| !name.is_empty()) else {
                continue;
            };
            match connections.get(name) {
                Some((existing, _)) if *existing <= rank => {}
                _ => {
                    connections.insert(name.to_string(), (rank, value));
                }
            }
        }

        for (name, (_, value)) in connections {
            self.connection_strings.insert(name, value);
            applied += 1;
        }
        applied
    }
}

impl SettingsSource for SiteConfig {
    fn setting(&self, key: &str) -> Option<&str> {
        self.app_settings.setting(key)
    }
}

impl ConnectionStringRegistry for SiteConfig {
    fn connection_string(&self, name: &str) -> Result<&str, ConfigError> {
        self.connection_strings.connection_string(name)
    }
}

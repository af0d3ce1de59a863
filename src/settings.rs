// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only configuration stores and their accessor contracts.
//!
//! Application settings and connection strings are looked up through two
//! separate traits. Settings are lenient: a missing key is simply `None`.
//! Connection strings are strict: a missing name is a
//! [`ConfigError::ConfigurationMissing`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ConfigError;

/// Setting naming the deployment environment (slot) serving the request.
pub const ENVIRONMENT_KEY: &str = "WhatIsMyEnvironment";
pub const APPLICATION_NAME_KEY: &str = "ApplicationName";
pub const COLOR_KEY: &str = "Color";
pub const VERSION_KEY: &str = "Version";

/// Logical name of the database connection string.
pub const DATABASE_CONNECTION_STRING: &str = "DatabaseConnectionString";

/// Lenient lookup of application settings.
pub trait SettingsSource {
    fn setting(&self, key: &str) -> Option<&str>;
}

/// Strict lookup of named connection strings.
pub trait ConnectionStringRegistry {
    fn connection_string(&self, name: &str) -> Result<&str, ConfigError>;
}

/// Application settings keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AppSettings(BTreeMap<String, String>);

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SettingsSource for AppSettings {
    fn setting(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AppSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Connection descriptors keyed by logical name. Values are opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ConnectionStrings(BTreeMap<String, String>);

impl ConnectionStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, descriptor: impl Into<String>) {
        self.0.insert(name.into(), descriptor.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ConnectionStringRegistry for ConnectionStrings {
    fn connection_string(&self, name: &str) -> Result<&str, ConfigError> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::ConfigurationMissing(name.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_setting_is_none() {
        let settings: AppSettings = [(COLOR_KEY, "green")].into_iter().collect();
        assert_eq!(settings.setting(COLOR_KEY), Some("green"));
        assert_eq!(settings.setting(VERSION_KEY), None);
    }

    #[test]
    fn setting_lookup_is_case_sensitive() {
        let settings: AppSettings = [(COLOR_KEY, "green")].into_iter().collect();
        assert_eq!(settings.setting("color"), None);
    }

    #[test]
    fn empty_setting_value_is_kept() {
        let mut settings = AppSettings::new();
        settings.insert(VERSION_KEY, "");
        assert_eq!(settings.setting(VERSION_KEY), Some(""));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn missing_connection_string_is_an_error() {
        let connections = ConnectionStrings::new();
        let err = connections
            .connection_string(DATABASE_CONNECTION_STRING)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ConfigurationMissing(ref name) if name == DATABASE_CONNECTION_STRING
        ));
    }

    #[test]
    fn connection_string_is_returned_verbatim() {
        let mut connections = ConnectionStrings::new();
        connections.insert(DATABASE_CONNECTION_STRING, "Server=db;Database=x;");
        assert!(connections.contains(DATABASE_CONNECTION_STRING));
        assert_eq!(
            connections
                .connection_string(DATABASE_CONNECTION_STRING)
                .unwrap(),
            "Server=db;Database=x;"
        );
    }
}

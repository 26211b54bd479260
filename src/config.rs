// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Process-wide configuration store.
//!
//! The store is created on first access and lives for the rest of the
//! process. All access goes through [`ConfigurationStore::init`] or
//! [`ConfigurationStore::global`], so every caller observes the same instance.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use stay_pricing_rs::{BASE_RATE_KEY, ConfigurationStore, SettingValue};
//!
//! let store = ConfigurationStore::global();
//! assert_eq!(store.get(BASE_RATE_KEY), Some(SettingValue::Number(dec!(100.0))));
//!
//! store.set("temporada", "alta");
//! assert_eq!(ConfigurationStore::global().get("temporada"), Some("alta".into()));
//! ```

use crate::base::{BASE_RATE_KEY, DEFAULT_BASE_RATE, DEFAULT_MODE, MODE_KEY};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, info};

static STORE: OnceLock<ConfigurationStore> = OnceLock::new();

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Number(Decimal),
    Text(String),
    Flag(bool),
}

impl SettingValue {
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => write!(f, "{}", text),
            Self::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<Decimal> for SettingValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Key/value settings shared by the whole process.
///
/// Backed by a [`DashMap`], so a single key is always read or written as a
/// whole value. Writes to different keys are independent; there is no
/// cross-key transaction.
#[derive(Debug)]
pub struct ConfigurationStore {
    values: DashMap<String, SettingValue>,
}

impl ConfigurationStore {
    /// Builds a store holding the built-in defaults with `overlay` applied on top.
    fn with_overlay(overlay: Vec<(String, SettingValue)>) -> Self {
        let values = DashMap::new();
        values.insert(
            BASE_RATE_KEY.to_string(),
            SettingValue::Number(DEFAULT_BASE_RATE),
        );
        values.insert(MODE_KEY.to_string(), SettingValue::from(DEFAULT_MODE));
        for (key, value) in overlay {
            values.insert(key, value);
        }
        Self { values }
    }

    /// Returns the process-wide store, creating it on first call.
    ///
    /// The first call merges `overlay` on top of the defaults
    /// (`tarifa_base = 100.0`, `modo = "produccion"`). Every later call
    /// returns the existing instance unchanged and discards its overlay.
    /// Concurrent first calls create exactly one instance.
    pub fn init<I, K, V>(overlay: I) -> &'static Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SettingValue>,
    {
        let overlay: Vec<(String, SettingValue)> = overlay
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let overlay_len = overlay.len();

        let mut created = false;
        let store = STORE.get_or_init(|| {
            created = true;
            let store = Self::with_overlay(overlay);
            info!(settings = store.len(), "configuration store initialised");
            store
        });

        if !created && overlay_len > 0 {
            debug!(
                ignored = overlay_len,
                "configuration store already initialised, overlay ignored"
            );
        }
        store
    }

    /// Returns the process-wide store with no overlay.
    pub fn global() -> &'static Self {
        Self::init(Vec::<(String, SettingValue)>::new())
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    /// Returns the value stored under `key`, or `default` when absent.
    pub fn get_or(&self, key: &str, default: impl Into<SettingValue>) -> SettingValue {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Writes or overwrites `key`.
    pub fn set(&self, key: impl Into<String>, value: impl Into<SettingValue>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, value = %value, "setting updated");
        self.values.insert(key, value);
    }

    /// Returns an owned copy of every setting, sorted by key.
    ///
    /// Mutating the snapshot does not affect the store.
    pub fn all(&self) -> BTreeMap<String, SettingValue> {
        self.values
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

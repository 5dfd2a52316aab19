/*
 * ConfigIni: Loads sessioned key-value configuration files.
 * Copyright (C) 2022-2023  Hee Shin
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use crate::error::ErrorType;
use std::collections::btree_map::{self, BTreeMap};

/// Represents one session of a configuration file.
///
/// A session is the group of `key=value` lines that follows a
/// `[name]` header.  Keys are unique within a session and every value
/// is a non-empty string without whitespace.  Iteration visits keys
/// in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session(BTreeMap<String, String>);

impl Session {
    /// Creates a new, empty `Session`.
    pub fn new() -> Self {
        Session(Default::default())
    }

    /// Retrieves the value associated with the specified `key`, if
    /// any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config_ini::ConfigSet;
    ///
    /// let set: ConfigSet = "[db]\nhost=localhost".parse().unwrap();
    /// let db = set.session("db").unwrap();
    ///
    /// assert_eq!(db.get("host"), Some("localhost"));
    /// assert_eq!(db.get("port"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Retrieves the value associated with the specified `key`, or a
    /// `KeyNotFound` error naming `session` and `key`.
    ///
    /// The session does not know its own name, so the caller passes
    /// it in for the error message.
    pub fn string(&self, session: &str, key: &str) -> Result<&str, ErrorType> {
        self.get(key).ok_or_else(|| ErrorType::KeyNotFound {
            session: session.to_owned(),
            key: key.to_owned(),
        })
    }

    /// Checks if the session contains the key `key_name`.
    pub fn has_key(&self, key_name: &str) -> bool {
        self.0.contains_key(key_name)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the session holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the slot for `key`, occupied or vacant.  The parser
    /// uses it to insert a key exactly once.
    pub(crate) fn entry(&mut self, key: String) -> btree_map::Entry<'_, String, String> {
        self.0.entry(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.0.get_mut(key)
    }
}

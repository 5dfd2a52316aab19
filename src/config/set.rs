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

use crate::config::parser;
use crate::config::session::Session;
use crate::error::ErrorType;
use std::collections::BTreeMap;
use std::str::FromStr;

/// The full parsed structure of one configuration file: every
/// session and its key-value pairs.
///
/// A `ConfigSet` is produced in one piece by a successful parse.
/// Sessions are kept in name order.
///
/// # Example
///
/// ```rust
/// use config_ini::ConfigSet;
///
/// let set: ConfigSet = "[db]\nhost=localhost\nport=5432\n".parse().unwrap();
///
/// assert_eq!(set.session_names().collect::<Vec<_>>(), vec!["db"]);
/// assert_eq!(set.session("db").unwrap().get("port"), Some("5432"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSet(BTreeMap<String, Session>);

impl ConfigSet {
    pub(crate) fn new() -> Self {
        ConfigSet(Default::default())
    }

    /// Retrieves a reference to the session called `name`, if any.
    pub fn session(&self, name: &str) -> Option<&Session> {
        self.0.get(name)
    }

    pub(crate) fn session_mut(&mut self, name: &str) -> Option<&mut Session> {
        self.0.get_mut(name)
    }

    /// Registers an empty session under `name`, replacing any session
    /// of the same name, and returns it.
    pub(crate) fn reset_session(&mut self, name: &str) -> &mut Session {
        let slot = self.0.entry(name.to_owned()).or_default();
        *slot = Session::new();
        slot
    }

    /// Iterates over the session names in sorted order.
    pub fn session_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(name, session)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Session)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of sessions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no sessions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for ConfigSet {
    type Err = ErrorType;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parser::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_session_discards_previous_keys() {
        let mut set = ConfigSet::new();
        set.reset_session("db")
            .entry("host".to_owned())
            .or_insert_with(|| "localhost".to_owned());
        assert!(set.session("db").unwrap().has_key("host"));

        set.reset_session("db");
        assert!(set.session("db").unwrap().is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iterates_sessions_in_name_order() {
        let mut set = ConfigSet::new();
        set.reset_session("web");
        set.reset_session("db");
        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["db", "web"]);
    }
}

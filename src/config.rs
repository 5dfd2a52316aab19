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

pub(crate) mod parser;
pub(crate) mod session;
pub(crate) mod set;

use crate::config::session::Session;
use crate::config::set::ConfigSet;
use crate::error::{
    key_not_found_error, no_config_dir_error, not_loaded_error, session_not_found_error,
};
use crate::logger::{LocalLogger, LogLevel};
use crate::result::Result;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::{Path, PathBuf};

static RULE: &str = "--------------------------------------------------";

/// Holds the configuration loaded from one file.
///
/// A `ConfigIni` starts out empty.  A successful
/// [`load_from_path`](ConfigIni::load_from_path) fills it in one
/// piece and records the path of the file; a failed one leaves it as
/// it was.  Once loaded, values change only through
/// [`update_value`](ConfigIni::update_value).
///
/// # Example
///
/// ```rust,no_run
/// use config_ini::ConfigIni;
///
/// let mut config = ConfigIni::new();
/// config.load_from_path("database.ini").unwrap();
///
/// let host = config.value("db", "host").unwrap();
/// let port = config.value("db", "port").unwrap();
///
/// println!("Database configuration:");
/// println!("Host: {}", host);
/// println!("Port: {}", port);
/// ```
#[derive(Debug, Default)]
pub struct ConfigIni {
    configs: Option<ConfigSet>,
    source: Option<PathBuf>,
}

impl ConfigIni {
    /// Creates a new, unloaded `ConfigIni`.
    pub fn new() -> Self {
        ConfigIni::default()
    }

    /// Loads the configuration file at `path`, replacing whatever was
    /// loaded before.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` once the file is read and parsed.  An error
    /// reading the file is returned as the boxed `std::io::Error`
    /// itself.  A parse error is returned as a boxed
    /// [`ErrorType`](crate::ErrorType).  On either error the
    /// previously loaded configuration, if any, stays in place.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = {
            let mut file = OpenOptions::new().read(true).open(path)?;
            let mut buf = String::new();
            let _ = file.read_to_string(&mut buf)?;
            buf
        };
        let configs = parser::parse(&text)?;
        self.configs = Some(configs);
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    /// Loads `relative` from beneath the platform configuration
    /// directory, for example `~/.config` on Linux.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use config_ini::ConfigIni;
    ///
    /// let mut config = ConfigIni::new();
    /// config.load_from_config_dir("sup/sup.ini").unwrap();
    /// ```
    pub fn load_from_config_dir<P: AsRef<Path>>(&mut self, relative: P) -> Result<()> {
        let mut path = dirs::config_dir().ok_or_else(no_config_dir_error)?;
        path.push(relative);
        self.load_from_path(path)
    }

    /// Checks if a configuration file has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Returns the path of the loaded configuration file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Forgets the loaded configuration and its path.
    pub fn clear(&mut self) {
        self.configs = None;
        self.source = None;
    }

    /// Returns a read-only view of the loaded configuration.
    pub fn config_set(&self) -> Option<&ConfigSet> {
        self.configs.as_ref()
    }

    fn loaded(&self) -> Result<&ConfigSet> {
        self.configs.as_ref().ok_or_else(not_loaded_error)
    }

    fn loaded_session(&self, session: &str) -> Result<&Session> {
        self.loaded()?
            .session(session)
            .ok_or_else(|| session_not_found_error(session))
    }

    /// Retrieves the value of `key` in `session`.
    ///
    /// # Errors
    ///
    /// `NotLoaded` if nothing is loaded, `SessionNotFound` if there
    /// is no such session and `KeyNotFound` if the session exists
    /// without the key.
    pub fn value(&self, session: &str, key: &str) -> Result<&str> {
        Ok(self.loaded_session(session)?.string(session, key)?)
    }

    /// Retrieves a copy of `session`.
    ///
    /// The copy is detached from this `ConfigIni`; changing it does
    /// not change the loaded configuration.
    pub fn session(&self, session: &str) -> Result<Session> {
        self.loaded_session(session).map(Session::clone)
    }

    /// Applies `transform` to the value of `key` in `session`, stores
    /// the result in place of the old value and returns it.
    ///
    /// This is the only way to change a loaded value.  Lookup errors
    /// are the same as for [`value`](ConfigIni::value).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use config_ini::ConfigIni;
    ///
    /// let mut config = ConfigIni::new();
    /// config.load_from_path("app.ini").unwrap();
    ///
    /// let dir = config
    ///     .update_value("paths", "data", |v| v.insert_str(0, "/srv/"))
    ///     .unwrap();
    /// ```
    pub fn update_value<F>(&mut self, session: &str, key: &str, transform: F) -> Result<String>
    where
        F: FnOnce(&mut String),
    {
        let configs = self.configs.as_mut().ok_or_else(not_loaded_error)?;
        let value = configs
            .session_mut(session)
            .ok_or_else(|| session_not_found_error(session))?
            .get_mut(key)
            .ok_or_else(|| key_not_found_error(session, key))?;
        transform(value);
        Ok(value.clone())
    }

    /// Checks if `session` is loaded.
    pub fn has_session(&self, session: &str) -> bool {
        self.loaded_session(session).is_ok()
    }

    /// Checks if `session` is loaded and holds `key`.
    pub fn has_key(&self, session: &str, key: &str) -> bool {
        self.loaded_session(session)
            .map(|s| s.has_key(key))
            .unwrap_or(false)
    }

    /// Names of the loaded sessions in sorted order.  Empty when
    /// nothing is loaded.
    pub fn session_names(&self) -> Vec<&str> {
        self.configs
            .as_ref()
            .map(|c| c.session_names().collect())
            .unwrap_or_default()
    }

    /// Writes every session and its key-value pairs to `logger`.
    ///
    /// # Errors
    ///
    /// `NotLoaded` if nothing is loaded.
    pub fn dump(&self, logger: &LocalLogger) -> Result<()> {
        let configs = self.loaded()?;
        let source = self
            .source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        logger.log(LogLevel::Info, "@Print Config:");
        logger.log(LogLevel::Info, RULE);
        logger.log(LogLevel::Info, &format!("# Config file: {}", source));
        logger.log(LogLevel::Info, "# Config set: {");
        for (name, session) in configs.iter() {
            logger.log(LogLevel::Info, &format!("+ [{}]", name));
            for (key, value) in session.iter() {
                logger.log(LogLevel::Info, &format!("\t- {}={}", key, value));
            }
        }
        logger.log(LogLevel::Info, "}");
        logger.log(LogLevel::Info, RULE);
        Ok(())
    }
}

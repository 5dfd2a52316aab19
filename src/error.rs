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

use std::fmt::{self, Display};

/// A type alias for the error type used within the crate.
///
/// The `Error` type is a boxed dynamic trait object implementing the
/// `std::error::Error` trait.  Loading a configuration can fail with
/// an I/O error or with an [`ErrorType`], and both fit in this box
/// without being rewrapped.
pub type Error = Box<dyn std::error::Error>;

/// Represents the possible error types within the crate.
///
/// Parse errors carry the 1-based number of the offending line.
/// Lookup errors carry the names that were looked up.  I/O errors are
/// not among them: a failed read reaches the caller as the boxed
/// `std::io::Error` itself.
#[derive(Debug)]
pub enum ErrorType {
    /// The text has no session header or key-value line at all.
    EmptyConfig,
    /// A line is neither a session header nor a key-value pair.
    LineSyntax { line: usize },
    /// A key-value line appears before the first session header.
    KeyOutsideSession { line: usize },
    /// A key is defined twice within one session.
    DuplicateKey {
        line: usize,
        key: String,
        old_value: String,
        new_value: String,
    },
    /// Error indicating a missing session in the configuration.
    SessionNotFound(String),
    /// Error indicating a missing key in an existing session.
    KeyNotFound { session: String, key: String },
    /// No configuration has been loaded.
    NotLoaded,
    /// The platform has no configuration directory.
    NoConfigDir,
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorType::*;
        match self {
            EmptyConfig => write!(f, "config set is empty"),
            LineSyntax { line } => write!(f, "line {}: error ini config content", line),
            KeyOutsideSession { line } => {
                write!(f, "line {}: key defined before any session header", line)
            }
            DuplicateKey {
                line,
                key,
                old_value,
                new_value,
            } => write!(
                f,
                "line {}: config key ({}) conflict value ({} != {})",
                line, key, old_value, new_value
            ),
            SessionNotFound(session) => write!(f, "session [{}] does not exist", session),
            KeyNotFound { session, key } => {
                write!(f, "key [{}] does not exist in session [{}]", key, session)
            }
            NotLoaded => write!(f, "config not loaded"),
            NoConfigDir => write!(f, "no config directory in this platform"),
        }
    }
}

impl std::error::Error for ErrorType {}

/// Creates a new session_not_found_error.
pub(crate) fn session_not_found_error(session: &str) -> Error {
    Box::new(ErrorType::SessionNotFound(session.to_owned()))
}

/// Creates a new key_not_found_error.
pub(crate) fn key_not_found_error(session: &str, key: &str) -> Error {
    Box::new(ErrorType::KeyNotFound {
        session: session.to_owned(),
        key: key.to_owned(),
    })
}

/// Creates a new not_loaded_error.
pub(crate) fn not_loaded_error() -> Error {
    Box::new(ErrorType::NotLoaded)
}

/// Creates a new no_config_dir_error.
pub(crate) fn no_config_dir_error() -> Error {
    Box::new(ErrorType::NoConfigDir)
}

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

use chrono::Local;
use core::fmt::{self, Display};
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Represents the log level for logging messages.
///
/// In the order of increasing severity and decreasing verbosity, they
/// are: `Debug`, `Trace`, `Info`, `Warning`, `Error`, `Severe` and
/// `Fatal`.
///
/// # Examples
///
/// ```rust
/// use config_ini::logger::{LocalLogger, LogLevel};
///
/// let logger = LocalLogger::new("MyApp");
/// logger.log(LogLevel::Error, "Error description");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Represents debug-level log messages used for debugging
    /// purposes.
    Debug,
    /// Represents trace-level log messages used for detailed tracing
    /// and debugging.
    Trace,
    /// Represents informational log messages that provide general
    /// information.
    Info,
    /// Represents log messages indicating a potential issue or
    /// warning.
    Warning,
    /// Represents log messages indicating an error occurred.
    Error,
    /// Represents log messages indicating a severe error or critical
    /// issue.
    Severe,
    /// Represents log messages indicating a fatal error that causes
    /// the application to exit.
    Fatal,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use LogLevel::*;
        match self {
            Debug => write!(f, "Debug"),
            Trace => write!(f, "Trace"),
            Info => write!(f, "Info"),
            Warning => write!(f, "Warning"),
            Error => write!(f, "Error"),
            Severe => write!(f, "Severe"),
            Fatal => write!(f, "Fatal"),
        }
    }
}

enum Destination {
    Stderr,
    File(RefCell<File>),
}

/// Logs messages to a local logging destination, such as standard
/// error or a local file.
///
/// The configuration dump and the fatal accessors report through a
/// `LocalLogger`.  Every line carries the application identifier and
/// a local timestamp, so the output of several programs sharing one
/// terminal or one log file can be told apart and filtered with text
/// processing tools.
///
/// # Examples
///
/// ```rust
/// use config_ini::logger::{LocalLogger, LogLevel};
///
/// let logger = LocalLogger::new("my_app");
/// logger.log(LogLevel::Info, "Initializing application");
/// ```
pub struct LocalLogger {
    app_id: String,
    destination: Destination,
}

impl LocalLogger {
    /// Creates a new instance of `LocalLogger` that writes to
    /// standard error.
    ///
    /// The `app_id` identifies the source or context of the logged
    /// messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_ini::logger::LocalLogger;
    ///
    /// let logger = LocalLogger::new("my_app");
    /// ```
    pub fn new(app_id: &str) -> Self {
        LocalLogger {
            app_id: app_id.to_owned(),
            destination: Destination::Stderr,
        }
    }

    /// Creates a `LocalLogger` that appends to the file at `path`,
    /// creating it if needed.
    pub fn to_file<P: AsRef<Path>>(app_id: &str, path: P) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(LocalLogger {
            app_id: app_id.to_owned(),
            destination: Destination::File(RefCell::new(file)),
        })
    }

    /// Logs a message with the specified log level.
    ///
    /// You can use [format!](format!) macro to format a log message
    /// as in the example below.  A message that cannot be written to
    /// its file is dropped; logging never fails the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_ini::logger::{LocalLogger, LogLevel};
    ///
    /// let logger = LocalLogger::new("my_app");
    /// logger.log(LogLevel::Info, "Initializing application");
    /// logger.log(LogLevel::Info, &format!("Application ID: {}", "my_app"));
    /// ```
    pub fn log(&self, level: LogLevel, message: &str) {
        let line = format!(
            "[{}] [{}] {}: {}",
            self.app_id,
            Local::now(),
            level,
            message
        );
        match &self.destination {
            Destination::Stderr => eprintln!("{}", line),
            Destination::File(file) => {
                let _ = writeln!(file.borrow_mut(), "{}", line);
            }
        }
    }
}

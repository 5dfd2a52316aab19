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

use crate::config::session::Session;
use crate::config::ConfigIni;
use crate::logger::{LocalLogger, LogLevel};
use crate::result::Result;
use std::fmt::Display;

/// The exit status of a process stopped by a fatal accessor.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Lookups that stop the process when the configuration lacks what
/// they ask for.
///
/// Bring the trait into scope at call sites that cannot go on without
/// a setting.  Each method logs a `Fatal` message naming the method
/// and the error to `logger`, then exits with [`FATAL_EXIT_CODE`].
/// Everywhere else, use the error-returning methods of
/// [`ConfigIni`].
///
/// # Example
///
/// ```rust,no_run
/// use config_ini::fatal::OrDie;
/// use config_ini::logger::LocalLogger;
/// use config_ini::ConfigIni;
///
/// let logger = LocalLogger::new("my_app");
/// let mut config = ConfigIni::new();
/// config.load_from_path("app.ini").unwrap();
///
/// let endpoint = config.value_or_die("server", "endpoint", &logger);
/// ```
pub trait OrDie {
    fn value_or_die(&self, session: &str, key: &str, logger: &LocalLogger) -> String;

    fn update_value_or_die<F>(
        &mut self,
        session: &str,
        key: &str,
        logger: &LocalLogger,
        transform: F,
    ) -> String
    where
        F: FnOnce(&mut String);

    fn session_or_die(&self, session: &str, logger: &LocalLogger) -> Session;
}

impl OrDie for ConfigIni {
    fn value_or_die(&self, session: &str, key: &str, logger: &LocalLogger) -> String {
        or_die(
            "value_or_die",
            self.value(session, key).map(str::to_owned),
            logger,
        )
    }

    fn update_value_or_die<F>(
        &mut self,
        session: &str,
        key: &str,
        logger: &LocalLogger,
        transform: F,
    ) -> String
    where
        F: FnOnce(&mut String),
    {
        or_die(
            "update_value_or_die",
            self.update_value(session, key, transform),
            logger,
        )
    }

    fn session_or_die(&self, session: &str, logger: &LocalLogger) -> Session {
        or_die("session_or_die", self.session(session), logger)
    }
}

fn or_die<T>(context: &str, result: Result<T>, logger: &LocalLogger) -> T {
    match result {
        Ok(value) => value,
        Err(error) => die(context, error, logger),
    }
}

fn die(context: &str, error: impl Display, logger: &LocalLogger) -> ! {
    logger.log(LogLevel::Fatal, &fatal_message(context, error));
    std::process::exit(FATAL_EXIT_CODE)
}

fn fatal_message(context: &str, error: impl Display) -> String {
    format!("{}: {}", context, error)
}

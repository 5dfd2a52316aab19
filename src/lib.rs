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

//! Loads configuration files made of `[session]` headers and
//! `key=value` lines into memory and looks values up by session and
//! key.
//!
//! ```rust
//! use config_ini::ConfigSet;
//!
//! let set: ConfigSet = "[db]\nhost=localhost\nport=5432\n".parse().unwrap();
//! assert_eq!(set.session("db").and_then(|s| s.get("port")), Some("5432"));
//! ```

mod config;
mod error;
pub mod fatal;
pub mod logger;
mod result;

pub use crate::config::parser::parse;
pub use crate::config::session::Session;
pub use crate::config::set::ConfigSet;
pub use crate::config::ConfigIni;
pub use crate::error::{Error, ErrorType};
pub use crate::result::Result;

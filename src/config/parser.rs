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

//! Parses the text of a configuration file.
//!
//! The format is line oriented:
//!
//! ```text
//! [SessionName]
//! key1 = value1
//! key2=value2   # trailing comment
//! # full-line comment
//!
//! [AnotherSession]
//! key1=valueX
//! ```
//!
//! A comment runs from the first `#` to the end of its line.  After
//! the comment is stripped and the line trimmed, a line is blank, a
//! session header or a key-value pair.  Anything else stops the
//! parse.  A value ends at the first whitespace; whatever follows it
//! on the line is ignored.

use crate::config::session::Session;
use crate::config::set::ConfigSet;
use crate::error::ErrorType;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::btree_map::Entry;

static SESSION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\s*([^\[\]]*?)\s*\]$").expect("session header pattern"));
static KEY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s*=\s*([^#\s]+)").expect("key-value pattern"));

/// One meaningful line of a configuration file.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Header(&'a str),
    Pair(&'a str, &'a str),
}

/// Classifies a raw line.  Returns `None` for a line that is neither
/// blank, a header nor a key-value pair.
fn classify(raw: &str) -> Option<Line<'_>> {
    let line = match raw.find('#') {
        Some(start) => &raw[..start],
        None => raw,
    }
    .trim();

    if line.is_empty() {
        return Some(Line::Blank);
    }
    if let Some(captures) = SESSION_HEADER.captures(line) {
        let name = captures.get(1).map_or("", |m| m.as_str());
        return if name.is_empty() {
            None
        } else {
            Some(Line::Header(name))
        };
    }
    KEY_VALUE.captures(line).and_then(|captures| {
        let key = captures.get(1)?.as_str();
        let value = captures.get(2)?.as_str();
        Some(Line::Pair(key, value))
    })
}

/// Parses `text` into a [`ConfigSet`].
///
/// The parse is a single pass over the lines of `text`, numbered from
/// 1.  The first malformed line aborts it and nothing of the partial
/// result is returned.
///
/// # Errors
///
/// - `EmptyConfig` if `text` holds no header and no key-value line.
/// - `LineSyntax` for a line that matches neither form, including a
///   header with an empty name such as `[ ]`.
/// - `KeyOutsideSession` for a key-value line before the first header.
/// - `DuplicateKey` for the second definition of a key within one
///   session, even when both values are equal.
///
/// # Example
///
/// ```rust
/// use config_ini::{parse, ErrorType};
///
/// let set = parse("[db]\nhost = localhost # primary\n").unwrap();
/// assert_eq!(set.session("db").unwrap().get("host"), Some("localhost"));
///
/// assert!(matches!(parse("# nothing here\n"), Err(ErrorType::EmptyConfig)));
/// ```
pub fn parse(text: &str) -> Result<ConfigSet, ErrorType> {
    if text.is_empty() {
        return Err(ErrorType::EmptyConfig);
    }

    let mut set = ConfigSet::new();
    let mut current: Option<&str> = None;
    let mut accepted = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        match classify(raw).ok_or(ErrorType::LineSyntax { line })? {
            Line::Blank => continue,
            Line::Header(name) => {
                set.reset_session(name);
                current = Some(name);
            }
            Line::Pair(key, value) => {
                let session = current
                    .and_then(|name| set.session_mut(name))
                    .ok_or(ErrorType::KeyOutsideSession { line })?;
                insert(session, line, key, value)?;
            }
        }
        accepted += 1;
    }

    if accepted == 0 {
        return Err(ErrorType::EmptyConfig);
    }
    Ok(set)
}

fn insert(session: &mut Session, line: usize, key: &str, value: &str) -> Result<(), ErrorType> {
    match session.entry(key.to_owned()) {
        Entry::Occupied(existing) => Err(ErrorType::DuplicateKey {
            line,
            key: key.to_owned(),
            old_value: existing.get().clone(),
            new_value: value.to_owned(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value.to_owned());
            Ok(())
        }
    }
}

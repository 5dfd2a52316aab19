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

use std::error::Error;

/// Indicates if a function call succeeded.
///
/// Lookups and loads report their failures as a [`Box`]ed generic
/// error.  A load can fail with either an I/O error straight from the
/// file system or an [`ErrorType`](crate::error::ErrorType) from the
/// parser, and boxing lets both travel through `?` untouched.  To
/// handle a specific kind, downcast with
/// [`downcast_ref`](std::error::Error::downcast_ref).  The parser
/// itself returns a plain [`std::result::Result`] because its callers
/// always want the concrete kind.
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the movie record shown by every view, the static
//! catalog that supplies them, and the favourites collection built up by the
//! user during a session.

pub(crate) mod catalog;
pub(crate) mod favourites;

/// A single movie from the catalog.
///
/// Movies are plain immutable values, two movies are the same movie when all
/// of their fields are equal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Movie {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) director: String,
    pub(crate) actors: String,
    pub(crate) plot: String,
    pub(crate) rating: f32,
}

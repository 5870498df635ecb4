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

//! Unicode symbols for the TUI.
//!
//! Text-presentation symbols are used rather than emoji so they pick up the
//! theme colours and keep a single cell width in most terminal fonts.

// Stands in for the poster image on every row
pub(crate) const POSTER: &str = "\u{25A3}";

pub(crate) const FAVOURITE: &str = "\u{2665}";
pub(crate) const FAVOURITE_BORDER: &str = "\u{2661}";

pub(crate) const SHOW_DETAILS: &str = "\u{25BE}";
pub(crate) const HIDE_DETAILS: &str = "\u{25B4}";

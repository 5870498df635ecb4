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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and the
//! hexadecimal strings understood by terminal emulators.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
    pub(crate) error_colour: Color,

    pub(crate) favourite_fg: Color,
    pub(crate) poster_fg: Color,
    pub(crate) title_fg: Color,
    pub(crate) detail_label_fg: Color,
    pub(crate) detail_fg: Color,
    pub(crate) rating_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 22, 34),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            highlight_bg: Color::Rgb(48, 44, 80),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(36, 32, 52),
            error_colour: Color::Rgb(239, 83, 80),

            favourite_fg: Color::Rgb(3, 218, 197),
            poster_fg: Color::Rgb(162, 161, 166),
            title_fg: Color::Rgb(255, 255, 255),
            detail_label_fg: Color::Rgb(179, 157, 219),
            detail_fg: Color::Rgb(200, 200, 205),
            rating_fg: Color::Rgb(255, 215, 0),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for anything other than a [`Color::Rgb`], the terminal
    /// background is then left alone.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}

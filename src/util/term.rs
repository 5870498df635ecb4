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

//! Terminal environment and styling utilities.
//!
//! This module changes the terminal emulator's own background color with OSC
//! (Operating System Command) escape sequences, so the area around the TUI
//! matches the theme. Terminals that do not understand OSC 11/111 ignore the
//! sequences.

use std::io::{self, Write};

use crossterm::{execute, style::Print};

/// Sets the terminal background color using an OSC 11 escape sequence.
pub(crate) fn set_terminal_bg<W: Write>(out: &mut W, hex_color: &str) -> io::Result<()> {
    execute!(out, Print(format!("\x1b]11;{hex_color}\x07")))
}

/// Resets the terminal background to the user's own color (OSC 111).
pub(crate) fn reset_terminal_bg<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Print("\x1b]111\x07"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc_sequences() {
        let mut out = Vec::new();
        set_terminal_bg(&mut out, "#181622").unwrap();
        reset_terminal_bg(&mut out).unwrap();
        assert_eq!(out, b"\x1b]11;#181622\x07\x1b]111\x07");
    }
}

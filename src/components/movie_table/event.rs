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

//! Keyboard navigation for the movie table.
//!
//! Keys that move the highlight are consumed here; everything else is left to
//! the owning view.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::MovieTable;

impl MovieTable {
    /// Moves the highlight for navigation keys. Returns `true` if the event
    /// was consumed.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => self.goto_next(len),
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => self.goto_previous(len),
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, KeyModifiers::NONE) => self.goto_first(len),
            (KeyCode::Char('G'), KeyModifiers::NONE | KeyModifiers::SHIFT) | (KeyCode::End, KeyModifiers::NONE) => {
                self.goto_last(len)
            }
            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys_are_consumed() {
        let mut table = MovieTable::new();
        assert!(table.process_event(&key(KeyCode::Char('j')), 3));
        assert_eq!(table.selected(), Some(1));
        assert!(table.process_event(&key(KeyCode::Char('G')), 3));
        assert_eq!(table.selected(), Some(2));
        table.goto_first(3);
        let shifted = Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(table.process_event(&shifted, 3));
        assert_eq!(table.selected(), Some(2));
        assert!(table.process_event(&key(KeyCode::Up), 3));
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut table = MovieTable::new();
        assert!(!table.process_event(&key(KeyCode::Char('f')), 3));
        assert!(!table.process_event(&key(KeyCode::Enter), 3));
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_control_chords_are_not_navigation() {
        let mut table = MovieTable::new();
        let ctrl_j = Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL));
        assert!(!table.process_event(&ctrl_j, 3));
        assert_eq!(table.selected(), Some(0));
    }
}

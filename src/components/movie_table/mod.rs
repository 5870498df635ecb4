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

//! Shared movie table widget state.
//!
//! Both the home list and the favourites view are a scrollable table of
//! movie rows. This module owns the highlight position and the wrapping
//! navigation between rows. The movies themselves are not stored here, they
//! are passed in on every call so the table always reflects current state.

mod event;
mod render;

pub(crate) use render::{RowOptions, movie_row};

use ratatui::widgets::TableState;

use crate::model::Movie;

pub(crate) struct MovieTable {
    pub(crate) table_state: TableState,
}

impl MovieTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new().with_selected(Some(0)),
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// The highlighted movie, if the highlight is within `movies`.
    pub(crate) fn current<'a>(&self, movies: &'a [Movie]) -> Option<&'a Movie> {
        self.selected().and_then(|i| movies.get(i))
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    /// Keeps the highlight on a valid row after the list has changed length.
    pub(crate) fn clamp(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut table = MovieTable::new();
        assert_eq!(table.selected(), Some(0));

        table.goto_previous(3);
        assert_eq!(table.selected(), Some(2));
        table.goto_next(3);
        assert_eq!(table.selected(), Some(0));
        table.goto_next(3);
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_first_and_last() {
        let mut table = MovieTable::new();
        table.goto_last(5);
        assert_eq!(table.selected(), Some(4));
        table.goto_first(5);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_empty_table_ignores_navigation() {
        let mut table = MovieTable::new();
        table.clamp(0);
        table.goto_next(0);
        table.goto_previous(0);
        table.goto_last(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut table = MovieTable::new();
        table.goto_last(4);
        table.clamp(2);
        assert_eq!(table.selected(), Some(1));

        table.clamp(0);
        assert_eq!(table.selected(), None);

        table.clamp(3);
        assert_eq!(table.selected(), Some(0));
    }
}

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

//! Home tab: the full movie catalog.
//!
//! Every catalog movie is listed with its favourite icon and a detail arrow.
//! Which rows are expanded is local view state; favourites are owned by the
//! application and only read here.

mod event;
mod render;

use std::collections::HashSet;

use crate::components::MovieTable;

pub(crate) struct MovieListView {
    pub(crate) movie_table: MovieTable,
    expand_by_default: bool,
    toggled_details: HashSet<usize>,
}

impl MovieListView {
    pub(crate) fn new(expand_by_default: bool) -> Self {
        Self {
            movie_table: MovieTable::new(),
            expand_by_default,
            toggled_details: HashSet::new(),
        }
    }

    pub(crate) fn is_expanded(&self, index: usize) -> bool {
        self.expand_by_default ^ self.toggled_details.contains(&index)
    }

    pub(crate) fn toggle_details(&mut self, index: usize) {
        if !self.toggled_details.insert(index) {
            self.toggled_details.remove(&index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_details() {
        let mut view = MovieListView::new(false);
        assert!(!view.is_expanded(2));
        view.toggle_details(2);
        assert!(view.is_expanded(2));
        assert!(!view.is_expanded(1));
        view.toggle_details(2);
        assert!(!view.is_expanded(2));
    }

    #[test]
    fn test_expanded_by_default() {
        let mut view = MovieListView::new(true);
        assert!(view.is_expanded(0));
        view.toggle_details(0);
        assert!(!view.is_expanded(0));
    }
}

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

//! Favourites tab.
//!
//! Lists the favourite movies in the order they were added, using the same
//! rows as the home tab but without the detail affordance.

mod event;
mod render;

use crate::components::MovieTable;

pub(crate) struct FavouritesView {
    pub(crate) movie_table: MovieTable,
}

impl FavouritesView {
    pub(crate) fn new() -> Self {
        Self {
            movie_table: MovieTable::new(),
        }
    }

    /// Called whenever the favourites change so the highlight never points
    /// past the end of the list.
    pub(crate) fn favourites_changed(&mut self, len: usize) {
        self.movie_table.clamp(len);
    }
}

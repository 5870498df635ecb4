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

//! Interactive views shown in the main area of the screen.
//!
//! * [`MovieListView`]: the home tab, every catalog movie.
//! * [`FavouritesView`]: the favourites tab.
//! * [`MovieTable`]: the table state and row rendering both views share.

mod favourites;
mod movie_list;
mod movie_table;

pub(crate) use favourites::FavouritesView;
pub(crate) use movie_list::MovieListView;
pub(crate) use movie_table::{MovieTable, RowOptions, movie_row};

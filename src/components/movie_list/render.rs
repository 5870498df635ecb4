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

//! UI rendering logic for the home tab.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{MovieListView, MovieTable, RowOptions, movie_row},
    model::{Movie, favourites::Favourites},
    theme::Theme,
    util::format::format_count,
};

impl MovieListView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, movies: &[Movie], favourites: &Favourites, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_colour)
            .padding(Padding::horizontal(1));

        let header_text = format!(
            "Movies | {} | {}",
            format_count(movies.len(), "movie"),
            format_count(favourites.len(), "favourite")
        );

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        let width = MovieTable::title_width(chunks[1], true);
        let rows = movies
            .iter()
            .enumerate()
            .map(|(i, movie)| {
                let options = RowOptions {
                    is_favourite: favourites.is_favourite(movie),
                    details: Some(self.is_expanded(i)),
                };
                movie_row(movie, options, width, theme)
            })
            .collect();

        self.movie_table.draw(f, chunks[1], rows, true, theme);
    }
}

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

//! UI rendering logic for movie rows.
//!
//! Each row shows the poster placeholder, the title and the favourite icon.
//! Rows that offer the detail affordance also show an arrow, and when
//! expanded grow to list the remaining movie fields under the title.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::MovieTable,
    model::Movie,
    render::icons,
    theme::Theme,
    util::format::{format_rating, wrap_words},
};

const POSTER_WIDTH: u16 = 2;
const ICON_WIDTH: u16 = 2;
const DETAIL_LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RowOptions {
    pub(crate) is_favourite: bool,
    /// `None` hides the detail affordance, otherwise whether the row is
    /// expanded.
    pub(crate) details: Option<bool>,
}

/// Builds the table row for `movie`.
///
/// `width` is the width of the title column, used to wrap the plot when the
/// row is expanded.
pub(crate) fn movie_row<'a>(movie: &'a Movie, options: RowOptions, width: u16, theme: &Theme) -> Row<'a> {
    let favourite_icon = if options.is_favourite {
        icons::FAVOURITE
    } else {
        icons::FAVOURITE_BORDER
    };

    let mut text = Text::from(Line::from(Span::styled(
        movie.title.as_str(),
        Style::default()
            .fg(theme.title_fg)
            .add_modifier(Modifier::BOLD),
    )));

    if options.details == Some(true) {
        text.extend(detail_lines(movie, width, theme));
    }

    let height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);

    let mut cells = vec![
        Cell::from(Line::from(icons::POSTER).style(Style::default().fg(theme.poster_fg))),
        Cell::from(text),
        Cell::from(Line::from(favourite_icon).style(Style::default().fg(theme.favourite_fg))),
    ];

    if let Some(expanded) = options.details {
        let arrow = if expanded {
            icons::HIDE_DETAILS
        } else {
            icons::SHOW_DETAILS
        };
        cells.push(Cell::from(Line::from(arrow).style(Style::default().fg(theme.detail_label_fg))));
    }

    Row::new(cells).height(height)
}

fn detail_lines<'a>(movie: &'a Movie, width: u16, theme: &Theme) -> Vec<Line<'a>> {
    let label = |name: &'static str| {
        Span::styled(
            format!("{name:<DETAIL_LABEL_WIDTH$}"),
            Style::default().fg(theme.detail_label_fg),
        )
    };
    let value = |text: String| Span::styled(text, Style::default().fg(theme.detail_fg));

    let mut lines = vec![
        Line::from(vec![label("Year"), value(movie.year.clone())]),
        Line::from(vec![label("Genre"), value(movie.genre.clone())]),
        Line::from(vec![label("Director"), value(movie.director.clone())]),
        Line::from(vec![label("Actors"), value(movie.actors.clone())]),
        Line::from(vec![
            label("Rating"),
            Span::styled(format_rating(movie.rating), Style::default().fg(theme.rating_fg)),
        ]),
    ];

    let plot_width = usize::from(width).saturating_sub(DETAIL_LABEL_WIDTH).max(20);
    for (i, chunk) in wrap_words(&movie.plot, plot_width).into_iter().enumerate() {
        let prefix = if i == 0 {
            label("Plot")
        } else {
            Span::raw(" ".repeat(DETAIL_LABEL_WIDTH))
        };
        lines.push(Line::from(vec![prefix, value(chunk)]));
    }

    lines
}

impl MovieTable {
    /// Draws `rows` with the current highlight. `with_details` reserves the
    /// column for the detail arrow.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, rows: Vec<Row<'_>>, with_details: bool, theme: &Theme) {
        let detail_width = if with_details { ICON_WIDTH } else { 0 };

        let table = Table::new(
            rows,
            [
                Constraint::Length(POSTER_WIDTH),
                Constraint::Min(10),
                Constraint::Length(ICON_WIDTH),
                Constraint::Length(detail_width),
            ],
        )
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(theme.highlight_bg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Width left for the title column once the fixed columns are laid out.
    pub(crate) fn title_width(area: Rect, with_details: bool) -> u16 {
        let fixed = POSTER_WIDTH + ICON_WIDTH + if with_details { ICON_WIDTH } else { 0 };
        area.width.saturating_sub(fixed + 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::get_movies;

    #[test]
    fn test_expanded_row_lists_details() {
        let movies = get_movies();
        let lines = detail_lines(&movies[0], 60, &Theme::default());
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert!(text[0].starts_with("Year"));
        assert!(text[0].ends_with("2009"));
        assert!(text.iter().any(|l| l.contains("James Cameron")));
        assert!(text.iter().any(|l| l.contains("7.9/10")));
        assert!(text.iter().any(|l| l.starts_with("Plot")));
    }
}

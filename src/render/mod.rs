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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The current tab is read from the application state
//! and handed explicitly to each part of the screen that depends on it.

mod commander;
mod footer;
pub(crate) mod icons;
mod tabs;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{
    App, Tab,
    render::{commander::draw_commander, footer::draw_footer, tabs::draw_tabs},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the tab bar, the view for the current tab, a
/// line of key hints and the command/status line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app.tab, &app.theme);

    match app.tab {
        Tab::Home => app
            .movie_list_view
            .draw(f, outer[1], &app.movies, &app.favourites, &app.theme),
        Tab::Favourites => app
            .favourites_view
            .draw(f, outer[1], &app.favourites, &app.theme),
    }

    draw_footer(f, outer[2], app.tab, &app.theme);

    draw_commander(f, outer[3], &app.commander, app.status.as_ref(), &app.theme);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::config::AppConfig;

    fn render(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|l| l.contains(text))
    }

    #[test]
    fn test_home_lists_every_movie() {
        let mut app = App::new(AppConfig::default());
        let lines = render(&mut app);

        for movie in &app.movies {
            assert!(contains(&lines, &movie.title), "{}", movie.title);
        }
        assert!(contains(&lines, "Home"));
        assert!(contains(&lines, "Favourites"));
        assert!(!contains(&lines, icons::FAVOURITE));
    }

    #[test]
    fn test_favourite_icon_follows_state() {
        let mut app = App::new(AppConfig::default());
        let avatar = app.movies[0].clone();
        app.favourites.toggle(&avatar);

        let lines = render(&mut app);
        let row = lines.iter().find(|l| l.contains("Avatar")).unwrap();
        assert!(row.contains(icons::FAVOURITE));

        let row = lines.iter().find(|l| l.contains("Interstellar")).unwrap();
        assert!(row.contains(icons::FAVOURITE_BORDER));
    }

    #[test]
    fn test_favourites_tab_shows_only_favourites_in_order() {
        let mut app = App::new(AppConfig::default());
        let (vikings, avatar) = (app.movies[6].clone(), app.movies[0].clone());
        app.favourites.toggle(&vikings);
        app.favourites.toggle(&avatar);
        app.tab = Tab::Favourites;

        let lines = render(&mut app);
        let vikings_row = lines.iter().position(|l| l.contains("Vikings")).unwrap();
        let avatar_row = lines.iter().position(|l| l.contains("Avatar")).unwrap();
        assert!(vikings_row < avatar_row);
        assert!(!contains(&lines, "Interstellar"));
        assert!(!contains(&lines, icons::SHOW_DETAILS));
    }

    #[test]
    fn test_empty_favourites_shows_hint() {
        let mut app = App::new(AppConfig::default());
        app.tab = Tab::Favourites;
        let lines = render(&mut app);
        assert!(contains(&lines, "No favourites yet"));
    }

    #[test]
    fn test_expanded_row_shows_details() {
        let mut app = App::new(AppConfig::default());
        app.movie_list_view.toggle_details(0);
        let lines = render(&mut app);
        assert!(contains(&lines, "James Cameron"));
        assert!(!contains(&lines, "Zack Snyder"));
    }

    #[test]
    fn test_status_message_is_shown() {
        let mut app = App::new(AppConfig::default());
        app.status = Some(crate::StatusMessage::Info("Added Avatar to favourites".to_string()));
        let lines = render(&mut app);
        assert!(contains(&lines, "Added Avatar to favourites"));
    }
}

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

//! Event routing for the home tab.
//!
//! Navigation is delegated to the movie table. Toggling a favourite is
//! returned to the caller as a [`ViewAction`], expanding details is handled
//! locally.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::MovieListView,
    events::{AppEventProcessor, ViewAction},
    model::Movie,
};

impl AppEventProcessor for MovieListView {
    fn process_event(&mut self, event: &Event, movies: &[Movie]) -> Option<ViewAction> {
        if self.movie_table.process_event(event, movies.len()) {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => self
                .movie_table
                .current(movies)
                .map(|movie| ViewAction::ToggleFavourite(movie.clone())),

            (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char('d'), KeyModifiers::NONE) => {
                if let Some(index) = self.movie_table.selected().filter(|&i| i < movies.len()) {
                    self.toggle_details(index);
                }
                None
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::model::catalog::get_movies;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_toggle_returns_highlighted_movie() {
        let movies = get_movies();
        let mut view = MovieListView::new(false);

        assert_eq!(view.process_event(&key(KeyCode::Down), &movies), None);
        assert_eq!(
            view.process_event(&key(KeyCode::Char('f')), &movies),
            Some(ViewAction::ToggleFavourite(movies[1].clone()))
        );
    }

    #[test]
    fn test_enter_expands_highlighted_row() {
        let movies = get_movies();
        let mut view = MovieListView::new(false);

        assert_eq!(view.process_event(&key(KeyCode::Enter), &movies), None);
        assert!(view.is_expanded(0));
        assert_eq!(view.process_event(&key(KeyCode::Char('d')), &movies), None);
        assert!(!view.is_expanded(0));
    }

    #[test]
    fn test_control_chords_do_nothing() {
        let movies = get_movies();
        let mut view = MovieListView::new(false);

        assert_eq!(view.process_event(&ctrl('f'), &movies), None);
        assert_eq!(view.process_event(&ctrl('d'), &movies), None);
        assert!(!view.is_expanded(0));
    }
}

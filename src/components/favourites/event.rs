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

//! Event routing for the favourites tab.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::FavouritesView,
    events::{AppEventProcessor, ViewAction},
    model::Movie,
};

impl AppEventProcessor for FavouritesView {
    fn process_event(&mut self, event: &Event, movies: &[Movie]) -> Option<ViewAction> {
        if self.movie_table.process_event(event, movies.len()) {
            return None;
        }

        match event {
            Event::Key(key_event) => match (key_event.code, key_event.modifiers) {
                (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => self
                    .movie_table
                    .current(movies)
                    .map(|movie| ViewAction::ToggleFavourite(movie.clone())),

                _ => None,
            },

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

    #[test]
    fn test_toggle_on_empty_list_does_nothing() {
        let mut view = FavouritesView::new();
        assert_eq!(view.process_event(&key(KeyCode::Char('f')), &[]), None);
    }

    #[test]
    fn test_enter_does_not_expand() {
        let movies = get_movies();
        let mut view = FavouritesView::new();
        assert_eq!(view.process_event(&key(KeyCode::Enter), &movies[..2]), None);
    }

    #[test]
    fn test_space_returns_highlighted_movie() {
        let movies = get_movies();
        let mut view = FavouritesView::new();
        let last = Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(view.process_event(&last, &movies[..3]), None);
        assert_eq!(
            view.process_event(&key(KeyCode::Char(' ')), &movies[..3]),
            Some(ViewAction::ToggleFavourite(movies[2].clone()))
        );
    }

    #[test]
    fn test_control_f_does_not_toggle() {
        let movies = get_movies();
        let mut view = FavouritesView::new();
        let ctrl_f = Event::Key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(view.process_event(&ctrl_f, &movies[..2]), None);
    }
}

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

use tracing::{info, warn};

use crate::{
    App, StatusMessage, Tab,
    model::{Movie, catalog::find_by_title},
    util::format::format_count,
};

pub(super) fn handle_set_tab(app: &mut App, tab: Tab) {
    if app.tab != tab {
        info!(tab = tab.title(), "switching tab");
    }
    app.tab = tab;
}

pub(super) fn handle_toggle_favourite(app: &mut App, movie: &Movie) {
    let is_favourite = app.favourites.toggle(movie);
    app.favourites_view.favourites_changed(app.favourites.len());

    info!(id = %movie.id, title = %movie.title, is_favourite, "toggled favourite");

    let message = if is_favourite {
        format!("Added {} to favourites", movie.title)
    } else {
        format!("Removed {} from favourites", movie.title)
    };
    app.status = Some(StatusMessage::Info(message));
}

pub(super) fn handle_toggle_favourite_by_title(app: &mut App, title: &str) {
    match find_by_title(&app.movies, title).cloned() {
        Some(movie) => handle_toggle_favourite(app, &movie),
        None => handle_error(app, format!("No movie titled \"{}\"", title.trim())),
    }
}

pub(super) fn handle_clear_favourites(app: &mut App) {
    let movies = app.favourites.movies().to_vec();
    for movie in &movies {
        app.favourites.toggle(movie);
    }
    app.favourites_view.favourites_changed(app.favourites.len());

    info!(count = movies.len(), "cleared favourites");
    app.status = Some(StatusMessage::Info(format!("Cleared {}", format_count(movies.len(), "favourite"))));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "command failed");
    app.status = Some(StatusMessage::Error(message));
}

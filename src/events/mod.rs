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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a unidirectional event-loop pattern:
//!
//! 1. **Capture**: Key presses, resizes and ticks arrive as [`AppEvent`]s on
//!    the application channel.
//! 2. **Process**: [`handle_event`] applies each event to the [`App`] state.
//!    Views and the command line turn a key into an action that is applied
//!    before the next event is read, so buffered keys always see the state
//!    left by the key before them.
//! 3. **Render**: After each event is processed, the UI is re-drawn, so every
//!    view reflects the latest favourites.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::info;

use crate::{App, Tab, commander::CommanderAction, model::Movie, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,

    SetTab(Tab),

    ToggleFavourite(Movie),
    ToggleFavouriteByTitle(String),
    ClearFavourites,

    Error(String),

    ExitApplication,
}

/// A change to application state requested by a view.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewAction {
    ToggleFavourite(Movie),
}

/// Implemented by views that react to key input. `movies` are the rows the
/// view is currently showing.
pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: &Event, movies: &[Movie]) -> Option<ViewAction>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            info!("exit requested");
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::SetTab(tab) => handle_set_tab(app, tab),
        AppEvent::ToggleFavourite(movie) => handle_toggle_favourite(app, &movie),
        AppEvent::ToggleFavouriteByTitle(title) => handle_toggle_favourite_by_title(app, &title),
        AppEvent::ClearFavourites => handle_clear_favourites(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Resize | AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Routes a key press to the command line, the global bindings or the view
/// on the current tab, in that order.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);
    match app.commander.handle_event(&event) {
        CommanderAction::Ignored => {}
        CommanderAction::Consumed => return Ok(()),
        CommanderAction::Run(AppEvent::ExitApplication) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        CommanderAction::Run(command_event) => return handle_event(app, command_event),
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    let action = match app.tab {
        Tab::Home => app.movie_list_view.process_event(&event, &app.movies),
        Tab::Favourites => app
            .favourites_view
            .process_event(&event, app.favourites.movies()),
    };

    if let Some(ViewAction::ToggleFavourite(movie)) = action {
        handle_toggle_favourite(app, &movie);
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => app.event_tx.send(AppEvent::ExitApplication)?,

        (KeyCode::Char('1'), KeyModifiers::NONE) => handle_set_tab(app, Tab::Home),
        (KeyCode::Char('2'), KeyModifiers::NONE) => handle_set_tab(app, Tab::Favourites),
        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::BackTab, KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let next = app.tab.next();
            handle_set_tab(app, next);
        }

        (KeyCode::Esc, KeyModifiers::NONE) => app.status = None,

        _ => return Ok(false),
    }

    Ok(true)
}

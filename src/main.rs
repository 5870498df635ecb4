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

//! # Movie Catalog TUI.
//!
//! A terminal application that lists a fixed catalog of movies and lets the
//! user mark movies as favourites, shown on a separate tab.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI after every event.
//! * An **Input Thread** forwards key presses and resizes.
//! * A **Tick Thread** sends periodic ticks so the screen is redrawn even
//!   when nothing is pressed.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails. Communication
//! from the worker threads to the main thread is handled via
//! `std::sync::mpsc` channels; the workers never touch application state.

mod commander;
mod components;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::{Deserialize, Serialize};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info, warn};

use crate::{
    commander::Commander,
    components::{FavouritesView, MovieListView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{Movie, catalog::get_movies, favourites::Favourites},
    theme::Theme,
};

/// The tab shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    Favourites,
}

impl Tab {
    pub(crate) const ALL: [Tab; 2] = [Tab::Home, Tab::Favourites];

    pub(crate) const fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Favourites => 1,
        }
    }

    pub(crate) const fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Favourites => "Favourites",
        }
    }

    pub(crate) const fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Favourites,
            Tab::Favourites => Tab::Home,
        }
    }
}

/// A one-line message shown under the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusMessage {
    Info(String),
    Error(String),
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub tab: Tab,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub movies: Vec<Movie>,
    pub favourites: Favourites,

    pub movie_list_view: MovieListView,
    pub favourites_view: FavouritesView,

    pub commander: Commander,
    pub status: Option<StatusMessage>,
}

impl App {
    /// Create a new instance of application state with the catalog loaded and
    /// no favourites.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            tab: config.start_tab,
            event_tx,
            event_rx,
            movies: get_movies(),
            favourites: Favourites::new(),
            movie_list_view: MovieListView::new(config.expand_details),
            favourites_view: FavouritesView::new(),
            commander: Commander::new(),
            status: None,
            config,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    match logging::init_logger(&config.log_level) {
        Ok(path) => info!(path = %path.display(), "logging started"),
        Err(err) => eprintln!("warning: logging disabled: {:#}", anyhow::Error::from(err)),
    }

    let mut app = App::new(config);
    info!(movies = app.movies.len(), tab = app.tab.title(), "starting");

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!(favourites = app.favourites.len(), "shutting down");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    if let Err(err) = util::term::reset_terminal_bg(terminal.backend_mut()) {
        warn!(%err, "failed to reset terminal background");
    }
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    // Without input the user has no way to quit
                    error!(%err, "failed to read terminal input");
                    let _ = tx_input.send(AppEvent::ExitApplication);
                    return;
                }
            };
            if tx_input.send(event).is_err() {
                return;
            }
        }
    });

    // Periodic tick, effectively the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms.max(10));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    process_events(terminal, app)
}

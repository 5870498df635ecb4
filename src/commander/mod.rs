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

//! Command-line input logic and state management.
//!
//! Typing `:` opens the command line at the bottom of the screen. The text
//! is edited with a `tui-input` component and, when submitted, parsed into a
//! [`Command`] and handed back to the caller as an [`AppEvent`] to apply.

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{Tab, events::AppEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    SetTab(Tab),
    Toggle(String),
    ClearFavourites,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: toggle <title>")]
    MissingTitle,
}

/// Parses a submitted command line. Returns `Ok(None)` for blank input.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] | ["quit"] => Command::Quit,

        ["1"] | ["home"] => Command::SetTab(Tab::Home),
        ["2"] | ["fav"] | ["favourites"] => Command::SetTab(Tab::Favourites),

        ["toggle"] => return Err(CommandError::MissingTitle),
        ["toggle", title_parts @ ..] => Command::Toggle(title_parts.join(" ")),

        ["clear"] => Command::ClearFavourites,

        _ => return Err(CommandError::Unknown(buffer.trim().to_string())),
    };

    Ok(Some(command))
}

/// What the command line did with a key.
#[derive(Debug)]
pub(crate) enum CommanderAction {
    /// The command line is closed and the key was not `:`.
    Ignored,
    Consumed,
    /// A command line was submitted.
    Run(AppEvent),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles `event` if the command line is open, or opens it on `:`.
    pub(crate) fn handle_event(&mut self, event: &Event) -> CommanderAction {
        let Event::Key(key_event) = event else {
            return CommanderAction::Ignored;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return CommanderAction::Consumed;
            }
            return CommanderAction::Ignored;
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().to_string();
                self.close();
                if let Some(event) = self.run_command(&buffer) {
                    return CommanderAction::Run(event);
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        CommanderAction::Consumed
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }

    fn run_command(&self, buffer: &str) -> Option<AppEvent> {
        debug!(command = buffer, "running command");

        let event = match parse_command(buffer) {
            Ok(None) => return None,
            Ok(Some(Command::Quit)) => AppEvent::ExitApplication,
            Ok(Some(Command::SetTab(tab))) => AppEvent::SetTab(tab),
            Ok(Some(Command::Toggle(title))) => AppEvent::ToggleFavouriteByTitle(title),
            Ok(Some(Command::ClearFavourites)) => AppEvent::ClearFavourites,
            Err(err) => AppEvent::Error(err.to_string()),
        };

        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(commander: &mut Commander, text: &str) {
        for c in text.chars() {
            assert!(matches!(commander.handle_event(&key(KeyCode::Char(c))), CommanderAction::Consumed));
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command(" quit "), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("1"), Ok(Some(Command::SetTab(Tab::Home))));
        assert_eq!(parse_command("fav"), Ok(Some(Command::SetTab(Tab::Favourites))));
        assert_eq!(parse_command("clear"), Ok(Some(Command::ClearFavourites)));
        assert_eq!(
            parse_command("toggle the  wolf of wall street"),
            Ok(Some(Command::Toggle("the wolf of wall street".to_string())))
        );
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("toggle"), Err(CommandError::MissingTitle));
        assert_eq!(parse_command("rewind 10"), Err(CommandError::Unknown("rewind 10".to_string())));
    }

    #[test]
    fn test_inactive_commander_ignores_keys() {
        let mut commander = Commander::new();
        assert!(matches!(commander.handle_event(&key(KeyCode::Char('q'))), CommanderAction::Ignored));
        assert!(!commander.active());
    }

    #[test]
    fn test_submit_toggle_command() {
        let mut commander = Commander::new();

        assert!(matches!(commander.handle_event(&key(KeyCode::Char(':'))), CommanderAction::Consumed));
        assert!(commander.active());
        type_text(&mut commander, "toggle Vikings");
        assert_eq!(commander.input.value(), "toggle Vikings");

        match commander.handle_event(&key(KeyCode::Enter)) {
            CommanderAction::Run(AppEvent::ToggleFavouriteByTitle(title)) => assert_eq!(title, "Vikings"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')));
        type_text(&mut commander, "play");

        match commander.handle_event(&key(KeyCode::Enter)) {
            CommanderAction::Run(AppEvent::Error(message)) => assert_eq!(message, "unknown command: play"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_blank_submit_runs_nothing() {
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')));
        assert!(matches!(commander.handle_event(&key(KeyCode::Enter)), CommanderAction::Consumed));
        assert!(!commander.active());
    }

    #[test]
    fn test_escape_discards_input() {
        let mut commander = Commander::new();
        commander.handle_event(&key(KeyCode::Char(':')));
        type_text(&mut commander, "clear");
        assert!(matches!(commander.handle_event(&key(KeyCode::Esc)), CommanderAction::Consumed));

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }
}

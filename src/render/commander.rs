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

//! Render the command-line interface.
//!
//! While the command line is open this shows the current text and cursor,
//! otherwise it shows the latest status message.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{StatusMessage, commander::Commander, theme::Theme};

pub(crate) fn draw_commander(
    f: &mut Frame,
    area: Rect,
    commander: &Commander,
    status: Option<&StatusMessage>,
    theme: &Theme,
) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value())).style(
                Style::default()
                    .fg(theme.commander_colour)
                    .bg(theme.commander_bg),
            ),
            container[0],
        );

        let cursor = u16::try_from(commander.input.visual_cursor()).unwrap_or(u16::MAX);
        let cursor_x = container[0].x.saturating_add(1).saturating_add(cursor);
        f.set_cursor_position((cursor_x, container[0].y));
        return;
    }

    let paragraph = match status {
        Some(StatusMessage::Info(message)) => {
            Paragraph::new(message.as_str()).style(Style::default().fg(theme.commander_colour))
        }
        Some(StatusMessage::Error(message)) => {
            Paragraph::new(message.as_str()).style(Style::default().fg(theme.error_colour))
        }
        None => Paragraph::new(""),
    };

    f.render_widget(paragraph, container[0]);
}

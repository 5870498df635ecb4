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

//! Render the tab bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Tabs},
};

use crate::{Tab, theme::Theme};

pub(crate) fn draw_tabs(f: &mut Frame, area: Rect, current: Tab, theme: &Theme) {
    let titles = Tab::ALL.iter().map(|tab| format!("{} {}", tab.index() + 1, tab.title()));

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(theme.detail_fg))
        .highlight_style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border_colour)
                .padding(Padding::horizontal(1)),
        );

    f.render_widget(tabs, area);
}

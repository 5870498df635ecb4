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

//! Key binding hints for the current tab.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{Tab, theme::Theme};

fn hints(tab: Tab) -> &'static [(&'static str, &'static str)] {
    match tab {
        Tab::Home => &[
            ("j/k", "Move"),
            ("f", "Favourite"),
            ("Enter", "Details"),
            ("Tab", "Switch"),
            (":", "Command"),
            ("q", "Quit"),
        ],
        Tab::Favourites => &[
            ("j/k", "Move"),
            ("f", "Remove"),
            ("Tab", "Switch"),
            (":", "Command"),
            ("q", "Quit"),
        ],
    }
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, tab: Tab, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints(tab).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2502} ", Style::default().fg(theme.border_colour)));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.accent_colour)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*action, Style::default().fg(theme.detail_fg)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

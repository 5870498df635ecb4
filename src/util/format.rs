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

/// Formats a rating out of ten with one decimal place.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_rating(7.9), "7.9/10");
/// ```
pub(crate) fn format_rating(rating: f32) -> String {
    format!("{rating:.1}/10")
}

/// Formats a count with the singular or plural noun, e.g. "1 movie".
pub(crate) fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Splits `text` into lines of at most `width` characters, breaking on
/// whitespace. A single word longer than `width` gets a line of its own.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("a team of explorers travel through a wormhole", 16),
            ["a team of", "explorers travel", "through a", "wormhole"]
        );
        assert_eq!(wrap_words("supercalifragilistic word", 5), ["supercalifragilistic", "word"]);
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(7.9), "7.9/10");
        assert_eq!(format_rating(9.0), "9.0/10");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, "movie"), "0 movies");
        assert_eq!(format_count(1, "movie"), "1 movie");
        assert_eq!(format_count(9, "favourite"), "9 favourites");
    }
}

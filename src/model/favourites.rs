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

//! Favourite movies.
//!
//! This module holds the set of movies the user has marked during the current
//! session. Membership is by value equality and movies are kept in the order
//! they were added so the favourites view is stable between redraws. Nothing
//! here is persisted, every run starts with an empty set.

use crate::model::Movie;

#[derive(Debug, Default)]
pub(crate) struct Favourites {
    movies: Vec<Movie>,
}

impl Favourites {
    pub(crate) fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Adds `movie` if it is not a favourite, removes it if it is.
    ///
    /// Any movie is accepted, including ones that are not in the catalog.
    /// Returns whether the movie is a favourite after the call.
    pub(crate) fn toggle(&mut self, movie: &Movie) -> bool {
        match self.movies.iter().position(|m| m == movie) {
            Some(idx) => {
                self.movies.remove(idx);
                false
            }
            None => {
                self.movies.push(movie.clone());
                true
            }
        }
    }

    pub(crate) fn is_favourite(&self, movie: &Movie) -> bool {
        self.movies.contains(movie)
    }

    /// Favourite movies in the order they were added.
    pub(crate) fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub(crate) fn len(&self) -> usize {
        self.movies.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::get_movies;

    fn movie(title: &str) -> Movie {
        Movie {
            id: format!("id-{title}"),
            title: title.to_string(),
            year: "2000".to_string(),
            genre: "Drama".to_string(),
            director: "Nobody".to_string(),
            actors: "No One".to_string(),
            plot: "Nothing happens.".to_string(),
            rating: 5.0,
        }
    }

    fn titles(favourites: &Favourites) -> Vec<&str> {
        favourites.movies().iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_starts_empty() {
        let favourites = Favourites::new();
        assert!(favourites.is_empty());
        assert_eq!(favourites.len(), 0);
    }

    #[test]
    fn test_toggle_adds_unfavourited_movie() {
        let mut favourites = Favourites::new();
        for m in get_movies() {
            assert!(!favourites.is_favourite(&m));
            assert!(favourites.toggle(&m));
            assert!(favourites.is_favourite(&m));
        }
        assert_eq!(favourites.len(), get_movies().len());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let movies = get_movies();
        let mut favourites = Favourites::new();
        favourites.toggle(&movies[1]);

        for m in &movies {
            let before = favourites.is_favourite(m);
            favourites.toggle(m);
            favourites.toggle(m);
            assert_eq!(favourites.is_favourite(m), before, "{}", m.title);
        }
    }

    #[test]
    fn test_insertion_order_scenario() {
        let (a, b) = (movie("A"), movie("B"));
        let mut favourites = Favourites::new();

        assert!(favourites.toggle(&b));
        assert_eq!(titles(&favourites), ["B"]);

        assert!(favourites.toggle(&a));
        assert_eq!(titles(&favourites), ["B", "A"]);

        assert!(!favourites.toggle(&b));
        assert_eq!(titles(&favourites), ["A"]);
    }

    #[test]
    fn test_movie_outside_catalog_is_accepted() {
        let stranger = movie("Not In The Catalog");
        let mut favourites = Favourites::new();
        favourites.toggle(&stranger);
        assert!(favourites.is_favourite(&stranger));
        assert_eq!(titles(&favourites), ["Not In The Catalog"]);
    }

    #[test]
    fn test_membership_matches_odd_toggle_count() {
        let movies = get_movies();
        let mut favourites = Favourites::new();
        let mut counts = vec![0usize; movies.len()];

        // Deterministic pseudo-random toggle sequence over the catalog.
        let mut idx = 0usize;
        for step in 0..50 {
            idx = (idx * 7 + step + 3) % movies.len();
            favourites.toggle(&movies[idx]);
            counts[idx] += 1;
        }

        for (m, count) in movies.iter().zip(counts) {
            assert_eq!(favourites.is_favourite(m), count % 2 == 1, "{}", m.title);
        }
        assert!(favourites.movies().iter().all(|f| movies.contains(f)));
    }

    #[test]
    fn test_equal_values_share_membership() {
        let first = movie("Twin");
        let second = movie("Twin");
        let mut favourites = Favourites::new();
        favourites.toggle(&first);
        assert!(favourites.is_favourite(&second));
        assert_eq!(favourites.len(), 1);
    }
}

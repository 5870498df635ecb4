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

//! Static movie catalog.
//!
//! The catalog is fixed at build time, there is no loading step and no
//! failure mode. Every call returns the same movies in the same order.

use crate::model::Movie;

struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    year: &'static str,
    genre: &'static str,
    director: &'static str,
    actors: &'static str,
    plot: &'static str,
    rating: f32,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "tt0499549",
        title: "Avatar",
        year: "2009",
        genre: "Action, Adventure, Fantasy",
        director: "James Cameron",
        actors: "Sam Worthington, Zoe Saldana, Sigourney Weaver, Stephen Lang",
        plot: "A paraplegic marine dispatched to the moon Pandora on a unique mission becomes \
               torn between following his orders and protecting the world he feels is his home.",
        rating: 7.9,
    },
    CatalogEntry {
        id: "tt0416449",
        title: "300",
        year: "2006",
        genre: "Action, Drama, Fantasy",
        director: "Zack Snyder",
        actors: "Gerard Butler, Lena Headey, Dominic West, David Wenham",
        plot: "King Leonidas of Sparta and a force of 300 men fight the Persians at \
               Thermopylae in 480 B.C.",
        rating: 7.7,
    },
    CatalogEntry {
        id: "tt0848228",
        title: "The Avengers",
        year: "2012",
        genre: "Action, Sci-Fi, Thriller",
        director: "Joss Whedon",
        actors: "Robert Downey Jr., Chris Evans, Mark Ruffalo, Chris Hemsworth",
        plot: "Earth's mightiest heroes must come together and learn to fight as a team if \
               they are to stop the mischievous Loki and his alien army from enslaving humanity.",
        rating: 8.1,
    },
    CatalogEntry {
        id: "tt0993846",
        title: "The Wolf of Wall Street",
        year: "2013",
        genre: "Biography, Comedy, Crime",
        director: "Martin Scorsese",
        actors: "Leonardo DiCaprio, Jonah Hill, Margot Robbie, Matthew McConaughey",
        plot: "Based on the true story of Jordan Belfort, from his rise to a wealthy \
               stock-broker living the high life to his fall involving crime, corruption and \
               the federal government.",
        rating: 8.2,
    },
    CatalogEntry {
        id: "tt0816692",
        title: "Interstellar",
        year: "2014",
        genre: "Adventure, Drama, Sci-Fi",
        director: "Christopher Nolan",
        actors: "Ellen Burstyn, Matthew McConaughey, Mackenzie Foy, John Lithgow",
        plot: "A team of explorers travel through a wormhole in space in an attempt to ensure \
               humanity's survival.",
        rating: 8.6,
    },
    CatalogEntry {
        id: "tt0944947",
        title: "Game of Thrones",
        year: "2011 - 2019",
        genre: "Adventure, Drama, Fantasy",
        director: "N/A",
        actors: "Peter Dinklage, Lena Headey, Emilia Clarke, Kit Harington",
        plot: "While a civil war brews between several noble families in Westeros, the \
               children of the former rulers of the land attempt to rise up to power.",
        rating: 9.2,
    },
    CatalogEntry {
        id: "tt2306299",
        title: "Vikings",
        year: "2013 - 2020",
        genre: "Action, Drama, History",
        director: "N/A",
        actors: "Travis Fimmel, Clive Standen, Gustaf Skarsgard, Katheryn Winnick",
        plot: "Vikings follows the adventures of Ragnar Lothbrok, the greatest hero of his \
               age.",
        rating: 9.5,
    },
    CatalogEntry {
        id: "tt0903747",
        title: "Breaking Bad",
        year: "2008 - 2013",
        genre: "Crime, Drama, Thriller",
        director: "N/A",
        actors: "Bryan Cranston, Anna Gunn, Aaron Paul, Dean Norris",
        plot: "A high school chemistry teacher diagnosed with a terminal illness turns to \
               manufacturing and selling methamphetamine in order to secure his family's future.",
        rating: 9.5,
    },
    CatalogEntry {
        id: "tt2707408",
        title: "Narcos",
        year: "2015 - 2017",
        genre: "Biography, Crime, Drama",
        director: "N/A",
        actors: "Wagner Moura, Boyd Holbrook, Pedro Pascal, Joanna Christie",
        plot: "A chronicled look at the criminal exploits of Colombian drug lord Pablo \
               Escobar.",
        rating: 8.9,
    },
];

impl From<&CatalogEntry> for Movie {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            year: entry.year.to_string(),
            genre: entry.genre.to_string(),
            director: entry.director.to_string(),
            actors: entry.actors.to_string(),
            plot: entry.plot.to_string(),
            rating: entry.rating,
        }
    }
}

/// Returns every movie in the catalog, in display order.
pub(crate) fn get_movies() -> Vec<Movie> {
    CATALOG.iter().map(Movie::from).collect()
}

/// Finds the first catalog movie whose title matches `title`, ignoring case
/// and surrounding whitespace.
pub(crate) fn find_by_title<'a>(movies: &'a [Movie], title: &str) -> Option<&'a Movie> {
    let title = title.trim();
    movies.iter().find(|m| m.title.eq_ignore_ascii_case(title))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_is_stable() {
        let first = get_movies();
        let second = get_movies();
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first[0].title, "Avatar");
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let movies = get_movies();
        let ids: HashSet<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), movies.len());
    }

    #[test]
    fn test_plot_continuations_are_joined() {
        for movie in get_movies() {
            assert!(!movie.plot.contains("  "), "{}", movie.title);
        }
    }

    #[test]
    fn test_find_by_title_ignores_case() {
        let movies = get_movies();
        let found = find_by_title(&movies, "  the avengers ");
        assert_eq!(found.map(|m| m.id.as_str()), Some("tt0848228"));
        assert!(find_by_title(&movies, "Casablanca").is_none());
    }
}

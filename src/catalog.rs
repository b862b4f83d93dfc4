//! Placeholder movie catalog, generated once at startup.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::theme::POSTER_THEMES;

pub const CATALOG_SIZE: usize = 18;
pub const BASE_YEAR: u16 = 2005;
pub const YEAR_SPAN: u16 = 19;
pub const BASE_DURATION: u16 = 90;
pub const DURATION_SPAN: u16 = 60;
pub const GENRE_STRIDE: usize = 3;
pub const DEFAULT_SEED: u64 = 2005;

pub const GENRES: [&str; 11] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Drama",
    "Fantasy",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Thriller",
];

const PLACEHOLDER_COPY: &str = "A high-energy, visually stunning journey through \
worlds of adventure. This is placeholder copy to demo the UI.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub rating: f32,
    /// Runtime in minutes.
    pub duration: u16,
    pub genre: String,
    pub description: String,
    /// Opaque poster styling token; carries no meaning beyond rendering.
    pub theme: String,
}

/// Build the placeholder catalog. Deterministic for a given seed; only the
/// ratings are drawn from the RNG, everything else derives from the index.
pub fn generate(seed: u64) -> Vec<MovieRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..CATALOG_SIZE)
        .map(|i| {
            // Truncate to one decimal so the value stays below 10.0.
            let rating = (rng.gen_range(6.0_f32..10.0) * 10.0).floor() / 10.0;
            MovieRecord {
                id: i as u32 + 1,
                title: format!("Sample Movie {}", i + 1),
                year: BASE_YEAR + (i as u16 % YEAR_SPAN),
                rating,
                duration: BASE_DURATION + (i as u16 % DURATION_SPAN),
                genre: GENRES[(i * GENRE_STRIDE) % GENRES.len()].to_string(),
                description: PLACEHOLDER_COPY.to_string(),
                theme: POSTER_THEMES[i % POSTER_THEMES.len()].to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_fixed_size_and_unique_ids() {
        let movies = generate(DEFAULT_SEED);
        assert_eq!(movies.len(), CATALOG_SIZE);
        let ids: HashSet<u32> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), CATALOG_SIZE);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[CATALOG_SIZE - 1].id, CATALOG_SIZE as u32);
    }

    #[test]
    fn genres_cycle_with_stride_three() {
        let movies = generate(DEFAULT_SEED);
        assert_eq!(movies[0].genre, "Action");
        assert_eq!(movies[1].genre, "Comedy");
        assert_eq!(movies[2].genre, "Fantasy");
        for (i, movie) in movies.iter().enumerate() {
            assert_eq!(movie.genre, GENRES[(i * GENRE_STRIDE) % GENRES.len()]);
        }
    }

    #[test]
    fn derived_fields_stay_in_bounds() {
        for movie in generate(DEFAULT_SEED) {
            assert!(movie.rating >= 6.0 && movie.rating < 10.0, "rating {}", movie.rating);
            assert!(movie.year >= BASE_YEAR && movie.year < BASE_YEAR + YEAR_SPAN);
            assert!(movie.duration >= BASE_DURATION);
            assert!(movie.duration < BASE_DURATION + DURATION_SPAN);
            assert!(!movie.description.is_empty());
        }
    }

    #[test]
    fn themes_cycle_through_the_pool() {
        let movies = generate(DEFAULT_SEED);
        for (i, movie) in movies.iter().enumerate() {
            assert_eq!(movie.theme, POSTER_THEMES[i % POSTER_THEMES.len()]);
        }
    }

    #[test]
    fn same_seed_reproduces_the_catalog() {
        assert_eq!(generate(7), generate(7));
        assert_ne!(generate(7), generate(8));
    }
}

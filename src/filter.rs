//! Pure filtering over the in-memory catalog.

use crate::catalog::{MovieRecord, BASE_YEAR};

/// Genre sentinel that disables genre matching.
pub const ALL_GENRES: &str = "All";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub genre: String,
    pub min_rating: f32,
    pub year_from: u16,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            genre: ALL_GENRES.to_string(),
            min_rating: 0.0,
            year_from: BASE_YEAR,
        }
    }
}

/// Stable filter: keeps catalog order, never sorts. A record passes only if
/// every criterion matches; an empty query matches every title.
pub fn filter(catalog: &[MovieRecord], criteria: &FilterCriteria) -> Vec<MovieRecord> {
    let query = criteria.query.to_lowercase();
    catalog
        .iter()
        .filter(|m| {
            m.title.to_lowercase().contains(&query)
                && (criteria.genre == ALL_GENRES || m.genre == criteria.genre)
                && m.rating >= criteria.min_rating
                && m.year >= criteria.year_from
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate, DEFAULT_SEED};

    fn ids(movies: &[MovieRecord]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn default_criteria_is_a_noop() {
        let movies = generate(DEFAULT_SEED);
        assert_eq!(filter(&movies, &FilterCriteria::default()), movies);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let movies = generate(DEFAULT_SEED);
        let criteria = FilterCriteria {
            query: "sample movie 1".to_string(),
            ..FilterCriteria::default()
        };
        // "Sample Movie 1" plus "Sample Movie 10" through "Sample Movie 18".
        let expected: Vec<u32> = std::iter::once(1).chain(10..=18).collect();
        assert_eq!(ids(&filter(&movies, &criteria)), expected);
    }

    #[test]
    fn genre_matches_exactly() {
        let movies = generate(DEFAULT_SEED);
        let action = FilterCriteria {
            genre: "Action".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&movies, &action)), vec![1, 12]);

        let drama = FilterCriteria {
            genre: "Drama".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&movies, &drama)), vec![10]);
    }

    #[test]
    fn year_from_keeps_later_releases() {
        let movies = generate(DEFAULT_SEED);
        let criteria = FilterCriteria {
            year_from: 2015,
            ..FilterCriteria::default()
        };
        // year = 2005 + index, so 2015 onward starts at id 11.
        assert_eq!(ids(&filter(&movies, &criteria)), (11..=18).collect::<Vec<u32>>());
    }

    #[test]
    fn min_rating_drops_low_scores() {
        let movies = generate(DEFAULT_SEED);
        let criteria = FilterCriteria {
            min_rating: 8.0,
            ..FilterCriteria::default()
        };
        let kept = filter(&movies, &criteria);
        assert!(kept.iter().all(|m| m.rating >= 8.0));
        let dropped = movies.len() - kept.len();
        assert_eq!(
            dropped,
            movies.iter().filter(|m| m.rating < 8.0).count()
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let movies = generate(DEFAULT_SEED);
        let criteria = FilterCriteria {
            query: "movie 1".to_string(),
            min_rating: 7.0,
            ..FilterCriteria::default()
        };
        let once = filter(&movies, &criteria);
        assert_eq!(filter(&once, &criteria), once);
    }

    #[test]
    fn relaxing_a_criterion_never_shrinks_the_result() {
        let movies = generate(DEFAULT_SEED);
        let strict = FilterCriteria {
            query: "movie 1".to_string(),
            genre: "Action".to_string(),
            min_rating: 7.0,
            year_from: 2010,
        };
        let strict_ids = ids(&filter(&movies, &strict));

        let relaxations = [
            FilterCriteria { query: String::new(), ..strict.clone() },
            FilterCriteria { genre: ALL_GENRES.to_string(), ..strict.clone() },
            FilterCriteria { min_rating: 0.0, ..strict.clone() },
            FilterCriteria { year_from: BASE_YEAR, ..strict.clone() },
        ];
        for relaxed in relaxations {
            let relaxed_ids = ids(&filter(&movies, &relaxed));
            assert!(relaxed_ids.len() >= strict_ids.len());
            for id in &strict_ids {
                assert!(relaxed_ids.contains(id));
            }
        }
    }

    #[test]
    fn catalog_order_is_preserved() {
        let movies = generate(DEFAULT_SEED);
        let criteria = FilterCriteria {
            min_rating: 6.5,
            ..FilterCriteria::default()
        };
        let kept = ids(&filter(&movies, &criteria));
        let mut sorted = kept.clone();
        sorted.sort_unstable();
        assert_eq!(kept, sorted);
    }
}

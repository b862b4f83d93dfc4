//! Session state: catalog, filter criteria, selection, favorites.
//!
//! Owned by the composition root and shared with widget callbacks behind
//! `Rc<RefCell<..>>`; everything resets when the process exits.

use std::collections::HashSet;

use crate::catalog::MovieRecord;
use crate::filter::{self, FilterCriteria};

pub struct AppState {
    catalog: Vec<MovieRecord>,
    criteria: FilterCriteria,
    selection: Option<u32>,
    favorites: HashSet<u32>,
}

impl AppState {
    pub fn new(catalog: Vec<MovieRecord>) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            selection: None,
            favorites: HashSet::new(),
        }
    }

    pub fn catalog(&self) -> &[MovieRecord] {
        &self.catalog
    }

    /// Records passing the current criteria, in catalog order.
    pub fn filtered(&self) -> Vec<MovieRecord> {
        filter::filter(&self.catalog, &self.criteria)
    }

    pub fn set_query(&mut self, query: &str) {
        self.criteria.query = query.to_string();
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.criteria.genre = genre.to_string();
    }

    pub fn set_min_rating(&mut self, min_rating: f32) {
        self.criteria.min_rating = min_rating;
    }

    pub fn set_year_from(&mut self, year_from: u16) {
        self.criteria.year_from = year_from;
    }

    /// Select a record by id, replacing any previous selection. Unknown ids
    /// leave the selection untouched.
    pub fn select(&mut self, id: u32) -> Option<&MovieRecord> {
        let index = self.catalog.iter().position(|m| m.id == id)?;
        self.selection = Some(id);
        Some(&self.catalog[index])
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection_id(&self) -> Option<u32> {
        self.selection
    }

    /// Flip the saved flag for one record; returns the new status.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generate, DEFAULT_SEED};

    fn state() -> AppState {
        AppState::new(generate(DEFAULT_SEED))
    }

    #[test]
    fn selection_replaces_and_clears() {
        let mut st = state();
        assert!(st.selection_id().is_none());

        assert_eq!(st.select(3).map(|m| m.id), Some(3));
        assert_eq!(st.selection_id(), Some(3));

        // Activating another card overwrites, whatever the prior state.
        assert_eq!(st.select(5).map(|m| m.id), Some(5));
        assert_eq!(st.selection_id(), Some(5));

        st.clear_selection();
        assert!(st.selection_id().is_none());

        // Dismissing from no-selection stays at no-selection.
        st.clear_selection();
        assert!(st.selection_id().is_none());
    }

    #[test]
    fn selecting_an_unknown_id_is_a_noop() {
        let mut st = state();
        st.select(2);
        assert!(st.select(999).is_none());
        assert_eq!(st.selection_id(), Some(2));
    }

    #[test]
    fn favorite_toggle_round_trips() {
        let mut st = state();
        assert!(!st.is_favorite(4));
        assert!(st.toggle_favorite(4));
        assert!(st.is_favorite(4));
        assert!(!st.toggle_favorite(4));
        assert!(!st.is_favorite(4));
    }

    #[test]
    fn favorites_are_independent_per_id() {
        let mut st = state();
        st.toggle_favorite(1);
        st.toggle_favorite(2);
        st.toggle_favorite(2);
        assert!(st.is_favorite(1));
        assert!(!st.is_favorite(2));
        assert!(!st.is_favorite(3));
    }

    #[test]
    fn criteria_actions_feed_the_filter() {
        let mut st = state();
        assert_eq!(st.filtered().len(), st.catalog().len());

        st.set_genre("Drama");
        let drama: Vec<u32> = st.filtered().iter().map(|m| m.id).collect();
        assert_eq!(drama, vec![10]);

        st.set_genre("All");
        st.set_query("Sample Movie 12");
        let by_title: Vec<u32> = st.filtered().iter().map(|m| m.id).collect();
        assert_eq!(by_title, vec![12]);

        st.set_query("");
        st.set_year_from(2020);
        st.set_min_rating(0.0);
        assert!(st.filtered().iter().all(|m| m.year >= 2020));
    }
}

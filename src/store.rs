//! Listing Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! current page of animals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Animal, AnimalPage};

/// Listing data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Animals of the current page
    pub animals: Vec<Animal>,
    /// Current page number (1-based)
    pub page: u32,
    /// Total number of pages for the current query
    pub total_pages: u32,
    /// Current search keyword (empty = plain listing)
    pub query: String,
    /// Global listing load error, shown instead of the table
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the listing with a freshly loaded page
pub fn store_set_listing(store: &AppStore, loaded: AnimalPage) {
    store.animals().set(loaded.animals);
    store.page().set(loaded.page);
    store.total_pages().set(loaded.total_pages);
    store.load_error().set(None);
}

/// Remove an animal from the store by ID
pub fn store_remove_animal(store: &AppStore, animal_id: u32) {
    store.animals().write().retain(|animal| animal.id != animal_id);
}

/// Record a listing load failure
pub fn store_set_load_error(store: &AppStore, message: String) {
    store.load_error().set(Some(message));
}

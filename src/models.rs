//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Animal data structure (matches the backend `animals` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub nom: String,
    pub espece: String,
    pub race: String,
    pub age: u32,
    pub description: Option<String>,
    pub email: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
}

/// One page of listing or search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalPage {
    pub animals: Vec<Animal>,
    pub page: u32,
    pub total_pages: u32,
}

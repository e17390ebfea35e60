//! Entity models
//!
//! Transient in-memory views assembled by the persistence gateway; the
//! row lifecycle itself is owned by the gateway.

use serde::{Deserialize, Serialize};

/// A single ingredient, shared by every recipe that references it.
///
/// Created lazily the first time a recipe names it, never updated in
/// place, and never removed when it becomes unreferenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
}

/// A recipe with its resolved ingredient set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

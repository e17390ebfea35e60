//! Recipe CRUD endpoints
//!
//! Each handler borrows one pooled connection for the duration of the
//! request; writes run in a single transaction inside the gateway, so
//! every exit path releases the unit of work.
//!
//! Validation and not-found outcomes are expected and never logged as
//! errors; storage failures are logged with the operation and entity id
//! before being translated to a generic response.

use axum::extract::{Path, Query, State};
use axum::Json;
use recipes_common::api::types::{DeleteResponse, RecipeInput};
use recipes_common::{Error, Recipe};
use serde::Deserialize;
use tracing::{error, info};

use crate::api::ApiError;
use crate::AppState;

/// Query parameters for GET /recipes
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,

    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// POST /recipes
///
/// Creates a recipe along with its ingredients. Ingredient names not yet
/// in the catalog are created on the fly.
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<Recipe>, ApiError> {
    input.validate()?;

    match state.store.create_recipe(&input).await {
        Ok(recipe) => {
            info!(recipe_id = recipe.id, "Created recipe");
            Ok(Json(recipe))
        }
        Err(e) => {
            error!("Error creating recipe: {e}");
            Err(e.into())
        }
    }
}

/// GET /recipes
///
/// Lists recipes with offset/limit pagination (defaults skip=0, limit=10).
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    if query.skip < 0 {
        return Err(ApiError::Validation("skip must be non-negative".to_string()));
    }
    if query.limit < 1 {
        return Err(ApiError::Validation("limit must be positive".to_string()));
    }

    match state.store.list_recipes(query.skip, query.limit).await {
        Ok(recipes) => Ok(Json(recipes)),
        Err(e) => {
            error!("Error listing recipes: {e}");
            Err(e.into())
        }
    }
}

/// GET /recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, ApiError> {
    match state.store.get_recipe(id).await {
        Ok(recipe) => Ok(Json(recipe)),
        Err(e @ Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            error!(recipe_id = id, "Error retrieving recipe: {e}");
            Err(e.into())
        }
    }
}

/// PUT /recipes/:id
///
/// Full replace: all scalar fields are overwritten and the ingredient
/// association set is rebuilt from `ingredient_names`.
pub async fn replace_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<Recipe>, ApiError> {
    input.validate()?;

    match state.store.replace_recipe(id, &input).await {
        Ok(recipe) => {
            info!(recipe_id = id, "Replaced recipe");
            Ok(Json(recipe))
        }
        Err(e @ Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            error!(recipe_id = id, "Error updating recipe: {e}");
            Err(e.into())
        }
    }
}

/// DELETE /recipes/:id
///
/// Removes the recipe and its association rows; ingredient rows stay.
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    match state.store.delete_recipe(id).await {
        Ok(()) => {
            info!(recipe_id = id, "Deleted recipe");
            Ok(Json(DeleteResponse {
                detail: "Recipe deleted".to_string(),
            }))
        }
        Err(e @ Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            error!(recipe_id = id, "Error deleting recipe: {e}");
            Err(e.into())
        }
    }
}

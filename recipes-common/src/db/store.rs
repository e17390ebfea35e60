//! Persistence gateway for recipes and ingredients
//!
//! Translates entity-level intents into durable storage operations. Every
//! write runs inside one transaction: either the recipe row, any newly
//! created ingredient rows, and all association rows commit together, or
//! none do (dropping an uncommitted sqlx transaction rolls it back).

use crate::api::types::RecipeInput;
use crate::db::models::{Ingredient, Recipe};
use crate::{Error, Result};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashSet;
use tracing::debug;

/// Scalar columns of a recipe row, in schema order
type RecipeRow = (i64, String, Option<String>, Option<String>, Option<f64>);

/// Gateway owning the lifecycle of entity rows and their association rows.
///
/// Constructed once at startup and handed to the HTTP layer explicitly -
/// never reachable through a process global.
#[derive(Clone)]
pub struct RecipeStore {
    pool: SqlitePool,
}

impl RecipeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool (tests, liveness probes)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a recipe, resolving each ingredient name by lookup-or-create
    /// and attaching the resulting set.
    pub async fn create_recipe(&self, input: &RecipeInput) -> Result<Recipe> {
        let mut tx = self.pool.begin().await?;

        let recipe_id = sqlx::query(
            "INSERT INTO recipes (title, description, instructions, rating) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.instructions)
        .bind(input.rating)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let ingredients = attach_ingredients(&mut tx, recipe_id, &input.ingredient_names).await?;

        tx.commit().await?;
        debug!(recipe_id, "created recipe");

        Ok(Recipe {
            id: recipe_id,
            title: input.title.clone(),
            description: input.description.clone(),
            instructions: input.instructions.clone(),
            rating: input.rating,
            ingredients,
        })
    }

    /// List recipes in insertion (primary-key) order.
    ///
    /// Returns at most `limit` recipes after skipping the first `skip`;
    /// an empty store yields an empty vector.
    pub async fn list_recipes(&self, skip: i64, limit: i64) -> Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            "SELECT id, title, description, instructions, rating FROM recipes \
             ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            let ingredients = load_ingredients(&self.pool, row.0).await?;
            recipes.push(assemble(row, ingredients));
        }

        Ok(recipes)
    }

    /// Fetch one recipe by id, including its resolved ingredients.
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe> {
        let row = sqlx::query_as::<_, RecipeRow>(
            "SELECT id, title, description, instructions, rating FROM recipes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("recipe {id}")))?;

        let ingredients = load_ingredients(&self.pool, id).await?;
        Ok(assemble(row, ingredients))
    }

    /// Replace a recipe wholesale: every scalar column is overwritten
    /// (absent optionals become NULL) and the entire association set is
    /// rebuilt from `ingredient_names`.
    pub async fn replace_recipe(&self, id: i64, input: &RecipeInput) -> Result<Recipe> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE recipes SET title = ?, description = ?, instructions = ?, rating = ? \
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.instructions)
        .bind(input.rating)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(Error::NotFound(format!("recipe {id}")));
        }

        sqlx::query("DELETE FROM recipe_ingredient WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let ingredients = attach_ingredients(&mut tx, id, &input.ingredient_names).await?;

        tx.commit().await?;
        debug!(recipe_id = id, "replaced recipe");

        Ok(Recipe {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            instructions: input.instructions.clone(),
            rating: input.rating,
            ingredients,
        })
    }

    /// Delete a recipe and all its association rows.
    ///
    /// Ingredient rows are kept even when they become unreferenced; the
    /// ingredient table behaves as a reusable catalog.
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM recipe_ingredient WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(Error::NotFound(format!("recipe {id}")));
        }

        tx.commit().await?;
        debug!(recipe_id = id, "deleted recipe");

        Ok(())
    }
}

/// Resolve each name to an ingredient row, creating missing ones, and link
/// them to the recipe.
///
/// Names are deduplicated preserving first occurrence, which keeps the
/// association set a true set. The conflict-tolerant insert makes the
/// lookup-or-create benign under concurrent writers: when another
/// transaction created the row first, the insert is a no-op and the
/// re-select picks up the existing id.
async fn attach_ingredients(
    tx: &mut Transaction<'_, Sqlite>,
    recipe_id: i64,
    names: &[String],
) -> Result<Vec<Ingredient>> {
    let mut seen = HashSet::new();
    let mut ingredients = Vec::new();

    for name in names {
        if !seen.insert(name.as_str()) {
            continue;
        }

        sqlx::query("INSERT INTO ingredients (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(&mut **tx)
            .await?;

        let ingredient_id: i64 = sqlx::query_scalar("SELECT id FROM ingredients WHERE name = ?")
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

        sqlx::query("INSERT INTO recipe_ingredient (recipe_id, ingredient_id) VALUES (?, ?)")
            .bind(recipe_id)
            .bind(ingredient_id)
            .execute(&mut **tx)
            .await?;

        ingredients.push(Ingredient {
            id: ingredient_id,
            name: name.clone(),
        });
    }

    Ok(ingredients)
}

/// Load the resolved ingredient set for a recipe
async fn load_ingredients(pool: &SqlitePool, recipe_id: i64) -> Result<Vec<Ingredient>> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT i.id, i.name FROM ingredients i \
         JOIN recipe_ingredient ri ON ri.ingredient_id = i.id \
         WHERE ri.recipe_id = ? \
         ORDER BY i.id",
    )
    .bind(recipe_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| Ingredient { id, name })
        .collect())
}

fn assemble(row: RecipeRow, ingredients: Vec<Ingredient>) -> Recipe {
    let (id, title, description, instructions, rating) = row;
    Recipe {
        id,
        title,
        description,
        instructions,
        rating,
        ingredients,
    }
}

//! Interactive field prompts
//!
//! All validation here is advisory only; the server remains the
//! authority on every field.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use recipes_common::api::types::RecipeInput;

/// Prompt for every recipe field, for both create and update flows.
pub fn recipe_input() -> Result<RecipeInput> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let instructions: String = Input::with_theme(&theme)
        .with_prompt("Instructions")
        .allow_empty(true)
        .interact_text()?;

    let rating_raw: String = Input::with_theme(&theme)
        .with_prompt("Rating (e.g. 4.5, empty for none)")
        .allow_empty(true)
        .interact_text()?;
    let rating = parse_rating(&rating_raw);

    let ingredients_raw: String = Input::with_theme(&theme)
        .with_prompt("Ingredient names (comma separated)")
        .allow_empty(true)
        .interact_text()?;

    Ok(RecipeInput {
        title,
        description: none_if_blank(description),
        instructions: none_if_blank(instructions),
        rating,
        ingredient_names: split_ingredient_names(&ingredients_raw),
    })
}

/// Prompt for a recipe id.
pub fn recipe_id(prompt: &str) -> Result<i64> {
    let id: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(id)
}

/// Prompt for the list offset, defaulting to the server default.
pub fn recipe_list_offset() -> Result<i64> {
    let skip: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Skip")
        .default(0)
        .interact_text()?;
    Ok(skip)
}

/// Prompt for the list page size, defaulting to the server default.
pub fn recipe_list_limit() -> Result<i64> {
    let limit: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Limit")
        .default(10)
        .interact_text()?;
    Ok(limit)
}

fn parse_rating(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(rating) => Some(rating),
        Err(_) => {
            println!(
                "{}",
                style("Could not parse the rating, leaving it unset.").yellow()
            );
            None
        }
    }
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn split_ingredient_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

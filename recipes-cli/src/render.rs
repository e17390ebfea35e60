//! Terminal rendering for API responses

use console::style;
use recipes_common::Recipe;

/// Render a recipe list as an aligned ID / Title / Rating table.
pub fn recipe_table(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("{}", style("No recipes found.").yellow());
        return;
    }

    let title_width = recipes
        .iter()
        .map(|r| r.title.len())
        .chain(std::iter::once("Title".len()))
        .max()
        .unwrap_or(5);

    // Style the whole padded line: escape codes inside a padded field
    // would throw the column widths off.
    let header = format!("{:>5}  {:<title_width$}  {:>6}", "ID", "Title", "Rating");
    println!("{}", style(header).bold());
    for recipe in recipes {
        let rating = recipe
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!("{:>5}  {:<title_width$}  {rating:>6}", recipe.id, recipe.title);
    }
}

/// Render one recipe as a labeled field block.
pub fn recipe_details(recipe: &Recipe) {
    println!("{} {}", style("Recipe").bold().green(), style(recipe.id).bold());
    field("Title", Some(&recipe.title));
    field("Description", recipe.description.as_deref());
    field("Instructions", recipe.instructions.as_deref());

    let rating = recipe.rating.map(|r| format!("{r:.1}"));
    field("Rating", rating.as_deref());

    if recipe.ingredients.is_empty() {
        field("Ingredients", Some("(none)"));
    } else {
        let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        field("Ingredients", Some(&names.join(", ")));
    }
}

fn field(label: &str, value: Option<&str>) {
    let shown = value.unwrap_or("-");
    println!("  {} {shown}", style(format!("{label:<13}")).cyan());
}

/// Render a failure without terminating the menu loop.
pub fn error(context: &str, err: &dyn std::fmt::Display) {
    eprintln!("{} {err}", style(format!("Error {context}:")).red().bold());
}

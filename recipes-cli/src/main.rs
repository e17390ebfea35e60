//! recipes-cli - interactive terminal client for the recipe catalog API
//!
//! Issues HTTP calls against a configured base URL and renders the JSON
//! responses. Performs no business logic of its own.

mod client;
mod prompts;
mod render;

use anyhow::Result;
use clap::Parser;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use client::ApiClient;

/// Interactive client for the recipe catalog API
#[derive(Debug, Parser)]
#[command(name = "recipes-cli", version, about)]
struct Args {
    /// Base URL of the recipe catalog server
    #[arg(long, env = "RECIPES_API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = ApiClient::new(&args.base_url);

    println!("{}", style("Recipe Catalog Client").bold().cyan());
    println!("Server: {}", args.base_url);

    match client.health().await {
        Ok(health) => println!(
            "Connected to {} v{}\n",
            health.module, health.version
        ),
        Err(e) => {
            render::error("reaching the server", &e);
            println!("Continuing anyway; calls will fail until the server is up.\n");
        }
    }

    let items = [
        "Add a new recipe",
        "View a recipe by ID",
        "Update a recipe by ID",
        "Delete a recipe by ID",
        "List recipes",
        "Exit",
    ];

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose an action")
            .default(0)
            .items(&items)
            .interact()?;

        match choice {
            0 => create_recipe(&client).await,
            1 => view_recipe(&client).await,
            2 => update_recipe(&client).await,
            3 => delete_recipe(&client).await,
            4 => list_recipes(&client).await,
            5 => break,
            _ => unreachable!("unexpected menu index"),
        }
        println!();
    }

    println!("{}", style("Goodbye!").cyan());
    Ok(())
}

async fn create_recipe(client: &ApiClient) {
    let input = match prompts::recipe_input() {
        Ok(input) => input,
        Err(e) => {
            render::error("reading input", &e);
            return;
        }
    };

    match client.create_recipe(&input).await {
        Ok(recipe) => {
            println!("{}", style("Created recipe:").green().bold());
            render::recipe_details(&recipe);
        }
        Err(e) => render::error("creating recipe", &e),
    }
}

async fn view_recipe(client: &ApiClient) {
    let id = match prompts::recipe_id("Recipe ID to view") {
        Ok(id) => id,
        Err(e) => {
            render::error("reading input", &e);
            return;
        }
    };

    match client.get_recipe(id).await {
        Ok(recipe) => render::recipe_details(&recipe),
        Err(e) => render::error("retrieving recipe", &e),
    }
}

async fn update_recipe(client: &ApiClient) {
    let id = match prompts::recipe_id("Recipe ID to update") {
        Ok(id) => id,
        Err(e) => {
            render::error("reading input", &e);
            return;
        }
    };

    println!("Enter the replacement values (the whole recipe is overwritten):");
    let input = match prompts::recipe_input() {
        Ok(input) => input,
        Err(e) => {
            render::error("reading input", &e);
            return;
        }
    };

    match client.update_recipe(id, &input).await {
        Ok(recipe) => {
            println!("{}", style("Updated recipe:").green().bold());
            render::recipe_details(&recipe);
        }
        Err(e) => render::error("updating recipe", &e),
    }
}

async fn delete_recipe(client: &ApiClient) {
    let id = match prompts::recipe_id("Recipe ID to delete") {
        Ok(id) => id,
        Err(e) => {
            render::error("reading input", &e);
            return;
        }
    };

    match client.delete_recipe(id).await {
        Ok(confirmation) => println!("{}", style(confirmation.detail).green()),
        Err(e) => render::error("deleting recipe", &e),
    }
}

async fn list_recipes(client: &ApiClient) {
    let skip = prompts::recipe_list_offset().unwrap_or(0);
    let limit = prompts::recipe_list_limit().unwrap_or(10);

    match client.list_recipes(skip, limit).await {
        Ok(recipes) => render::recipe_table(&recipes),
        Err(e) => render::error("listing recipes", &e),
    }
}

//! Informational pages
//!
//! Serves the static HTML welcome page and the JSON getting-started guide.

use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

const WELCOME_HTML: &str = include_str!("../ui/welcome.html");

/// GET /
///
/// Serves the welcome page
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_HTML)
}

/// GET /help
///
/// Getting-started guide with sample API calls
pub async fn help_guide() -> Json<Value> {
    Json(json!({
        "endpoints": {
            "GET /recipes": "Retrieve a list of recipes (query: skip, limit).",
            "POST /recipes": "Create a new recipe. Requires a JSON payload.",
            "GET /recipes/{id}": "Retrieve details of a specific recipe.",
            "PUT /recipes/{id}": "Replace an existing recipe.",
            "DELETE /recipes/{id}": "Delete a recipe.",
            "GET /health": "Liveness probe.",
            "GET /help": "View this help message."
        },
        "sample_payload_for_post_recipes": {
            "title": "Spaghetti Bolognese",
            "description": "A classic Italian pasta dish",
            "instructions": "Boil pasta. Prepare sauce. Combine and serve.",
            "rating": 4.5,
            "ingredient_names": [
                "Spaghetti",
                "Tomato",
                "Ground Beef",
                "Onion",
                "Garlic"
            ]
        }
    }))
}

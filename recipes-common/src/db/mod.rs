//! Database layer: pool initialization, migrations, models, and the
//! persistence gateway

pub mod init;
pub mod migrations;
pub mod models;
pub mod store;

pub use init::init_database;
pub use migrations::run_migrations;
pub use models::{Ingredient, Recipe};
pub use store::RecipeStore;

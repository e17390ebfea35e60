//! Request and response types exchanged at the HTTP boundary
//!
//! Used by both recipes-server (authoritative validation) and recipes-cli
//! (request construction and response parsing).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Body for `POST /recipes` and `PUT /recipes/:id`.
///
/// Update is a full overwrite, not a patch: optional fields left out of
/// the payload clear the stored values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeInput {
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub ingredient_names: Vec<String>,
}

impl RecipeInput {
    /// Reject input serde cannot catch: a present-but-blank title.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Confirmation body returned by `DELETE /recipes/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub detail: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness probe body for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        let input = RecipeInput {
            title: "   ".to_string(),
            description: None,
            instructions: None,
            rating: None,
            ingredient_names: vec![],
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn ingredient_names_default_to_empty() {
        let input: RecipeInput = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();
        assert_eq!(input.title, "Toast");
        assert!(input.ingredient_names.is_empty());
        assert!(input.rating.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn mistyped_rating_fails_to_parse() {
        let result =
            serde_json::from_str::<RecipeInput>(r#"{"title": "Toast", "rating": "tasty"}"#);
        assert!(result.is_err());
    }
}

//! HTTP client for the recipe catalog API
//!
//! Thin wrapper over reqwest: no business logic, no local validation
//! beyond what the prompts already did advisorily. The server stays the
//! authority on every field.

use recipes_common::api::types::{DeleteResponse, ErrorResponse, HealthResponse, RecipeInput};
use recipes_common::Recipe;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Client-side errors for API calls
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        parse(response).await
    }

    pub async fn list_recipes(&self, skip: i64, limit: i64) -> Result<Vec<Recipe>, ClientError> {
        let response = self
            .http
            .get(self.url("/recipes"))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        parse(response).await
    }

    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, ClientError> {
        let response = self.http.get(self.url(&format!("/recipes/{id}"))).send().await?;
        parse(response).await
    }

    pub async fn create_recipe(&self, input: &RecipeInput) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .post(self.url("/recipes"))
            .json(input)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn update_recipe(&self, id: i64, input: &RecipeInput) -> Result<Recipe, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/recipes/{id}")))
            .json(input)
            .send()
            .await?;
        parse(response).await
    }

    pub async fn delete_recipe(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/recipes/{id}")))
            .send()
            .await?;
        parse(response).await
    }
}

/// Decode a success body, or surface the server's error body as an
/// ApiError with its status code.
async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "unreadable error body".to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::backend::traits::PlantBackend;
use crate::model::plant::Plant;

/// HTTP implementation of [`PlantBackend`] against the GrowMate REST API:
/// `GET /plants`, `POST /plants/{id}/water`, `POST /plants/{id}/fertilize`,
/// bearer-token auth on every request.
#[derive(Clone)]
pub struct HttpPlantBackend {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpPlantBackend {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_empty(&self, path: &str) -> Result<()> {
        debug!(path, "POST");
        self.client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("request failed: POST {}", path))?
            .error_for_status()
            .with_context(|| format!("backend rejected POST {}", path))?;
        Ok(())
    }
}

#[async_trait]
impl PlantBackend for HttpPlantBackend {
    async fn list_plants(&self) -> Result<Vec<Plant>> {
        debug!("GET /plants");
        let plants = self
            .client
            .get(self.url("/plants"))
            .bearer_auth(&self.token)
            .send()
            .await
            .context("request failed: GET /plants")?
            .error_for_status()
            .context("backend rejected GET /plants")?
            .json::<Vec<Plant>>()
            .await
            .context("could not decode plant list")?;
        debug!(count = plants.len(), "fetched plants");
        Ok(plants)
    }

    async fn mark_watered(&self, id: &str) -> Result<()> {
        self.post_empty(&format!("/plants/{}/water", id)).await
    }

    async fn mark_fertilized(&self, id: &str) -> Result<()> {
        self.post_empty(&format!("/plants/{}/fertilize", id)).await
    }
}

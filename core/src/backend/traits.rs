use anyhow::Result;
use async_trait::async_trait;

use crate::model::plant::Plant;

/// The remote backend that owns the plant records. The engine only needs the
/// list plus the two per-plant "mark done" calls.
#[async_trait]
pub trait PlantBackend: Send + Sync {
    async fn list_plants(&self) -> Result<Vec<Plant>>;
    async fn mark_watered(&self, id: &str) -> Result<()>;
    async fn mark_fertilized(&self, id: &str) -> Result<()>;
}

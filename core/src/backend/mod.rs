pub mod http;
pub mod traits;

pub use http::HttpPlantBackend;
pub use traits::PlantBackend;

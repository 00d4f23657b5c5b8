pub mod care_service;
pub mod dto;

pub use care_service::{BulkCareError, BulkFailure, BulkReport, CareService};
pub use dto::{CareState, PlantStatus};

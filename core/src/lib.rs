pub mod backend;
pub mod model;
pub mod schedule;
pub mod service;
pub mod time;

pub use backend::{HttpPlantBackend, PlantBackend};
pub use model::{CalendarMarks, CareStats, CareTrack, DayMarks, Dot, DotKind, Plant};
pub use schedule::{
    build_schedule, days_left, due_plants, is_due, next_due, project, CareSchedule, HORIZON_DAYS,
};
pub use service::{BulkCareError, BulkFailure, BulkReport, CareService, CareState, PlantStatus};
pub use time::{normalize_care_day, WireTimestamp};

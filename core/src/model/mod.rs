pub mod calendar;
pub mod plant;
pub mod stats;

pub use calendar::{CalendarMarks, DayMarks, Dot, DotKind};
pub use plant::{CareTrack, Plant};
pub use stats::CareStats;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::{normalize_care_day, WireTimestamp};

pub const DEFAULT_WATERING_INTERVAL: i64 = 7;
pub const DEFAULT_FERTILIZING_INTERVAL: i64 = 30;

/// The two independent care schedules tracked per plant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareTrack {
    Watering,
    Fertilizing,
}

impl CareTrack {
    pub fn default_interval(&self) -> i64 {
        match self {
            CareTrack::Watering => DEFAULT_WATERING_INTERVAL,
            CareTrack::Fertilizing => DEFAULT_FERTILIZING_INTERVAL,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareTrack::Watering => "watering",
            CareTrack::Fertilizing => "fertilizing",
        }
    }
}

/// One plant record as owned by the backend. The engine only ever reads it.
///
/// Interval and timestamp fields are optional on the wire; the backend has
/// historically written records with any subset of them. Missing or
/// non-positive intervals fall back to the per-track default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default)]
    pub watering_interval: Option<i64>,
    #[serde(default)]
    pub fertilizing_interval: Option<i64>,
    #[serde(default)]
    pub last_watered: Option<WireTimestamp>,
    #[serde(default)]
    pub last_fertilized: Option<WireTimestamp>,
}

impl Plant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: None,
            watering_interval: None,
            fertilizing_interval: None,
            last_watered: None,
            last_fertilized: None,
        }
    }

    /// Care interval in days for a track, with the default applied for
    /// absent or non-positive values.
    pub fn interval(&self, track: CareTrack) -> i64 {
        let raw = match track {
            CareTrack::Watering => self.watering_interval,
            CareTrack::Fertilizing => self.fertilizing_interval,
        };
        match raw {
            Some(v) if v > 0 => v,
            _ => track.default_interval(),
        }
    }

    /// Normalized local calendar day of the last care event on a track, or
    /// `None` when the plant was never cared for (or the value is malformed).
    pub fn last_care_day(&self, track: CareTrack) -> Option<NaiveDate> {
        match track {
            CareTrack::Watering => normalize_care_day(&self.last_watered),
            CareTrack::Fertilizing => normalize_care_day(&self.last_fertilized),
        }
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::plant::{CareTrack, Plant};
use crate::schedule::{days_left, next_due};

/// Textual care state for one track, derived from the unified due rule.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareState {
    /// No care event ever recorded.
    NeverCared,
    Overdue,
    DueToday,
    Ok,
}

impl CareState {
    pub fn label(&self) -> &'static str {
        match self {
            CareState::NeverCared => "never",
            CareState::Overdue => "overdue",
            CareState::DueToday => "due today",
            CareState::Ok => "ok",
        }
    }
}

/// Flattened per-plant status for presentation: both tracks resolved to a
/// next-due date, days left and a state label.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlantStatus {
    pub id: String,
    pub name: String,
    pub species: Option<String>,
    pub next_watering: NaiveDate,
    pub water_days_left: i64,
    pub water_state: CareState,
    pub next_fertilizing: NaiveDate,
    pub fertilize_days_left: i64,
    pub fertilize_state: CareState,
}

fn track_state(plant: &Plant, track: CareTrack, left: i64) -> CareState {
    if plant.last_care_day(track).is_none() {
        CareState::NeverCared
    } else if left < 0 {
        CareState::Overdue
    } else if left == 0 {
        CareState::DueToday
    } else {
        CareState::Ok
    }
}

impl PlantStatus {
    pub fn from_plant(plant: &Plant, today: NaiveDate) -> Self {
        let water_left = days_left(plant, CareTrack::Watering, today);
        let fert_left = days_left(plant, CareTrack::Fertilizing, today);

        Self {
            id: plant.id.clone(),
            name: plant.name.clone(),
            species: plant.species.clone(),
            next_watering: next_due(
                plant.last_care_day(CareTrack::Watering),
                plant.interval(CareTrack::Watering),
                today,
            ),
            water_days_left: water_left,
            water_state: track_state(plant, CareTrack::Watering, water_left),
            next_fertilizing: next_due(
                plant.last_care_day(CareTrack::Fertilizing),
                plant.interval(CareTrack::Fertilizing),
                today,
            ),
            fertilize_days_left: fert_left,
            fertilize_state: track_state(plant, CareTrack::Fertilizing, fert_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::WireTimestamp;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_states() {
        let today = day(2026, 8, 15);
        let mut plant = Plant::new("p1", "Basil");
        plant.watering_interval = Some(7);

        // Never cared for: due immediately.
        let status = PlantStatus::from_plant(&plant, today);
        assert_eq!(status.water_state, CareState::NeverCared);
        assert_eq!(status.next_watering, today);
        assert_eq!(status.water_days_left, 0);

        plant.last_watered = Some(WireTimestamp::Iso(
            (today - Duration::days(7)).format("%Y-%m-%d").to_string(),
        ));
        let status = PlantStatus::from_plant(&plant, today);
        assert_eq!(status.water_state, CareState::DueToday);
        assert_eq!(status.water_days_left, 0);

        plant.last_watered = Some(WireTimestamp::Iso(
            (today - Duration::days(10)).format("%Y-%m-%d").to_string(),
        ));
        let status = PlantStatus::from_plant(&plant, today);
        assert_eq!(status.water_state, CareState::Overdue);
        assert_eq!(status.water_days_left, -3);

        plant.last_watered = Some(WireTimestamp::Iso(
            (today - Duration::days(2)).format("%Y-%m-%d").to_string(),
        ));
        let status = PlantStatus::from_plant(&plant, today);
        assert_eq!(status.water_state, CareState::Ok);
        assert_eq!(status.water_days_left, 5);
    }
}

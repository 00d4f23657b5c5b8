use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::model::calendar::{CalendarMarks, DotKind};
use crate::model::plant::{CareTrack, Plant};
use crate::model::stats::CareStats;

/// Forward window (days) within which future occurrences are projected onto
/// the calendar. Bounds every projection regardless of interval size.
pub const HORIZON_DAYS: i64 = 60;

/// Output of one engine run: the marking map plus aggregate stats, both
/// rebuilt from scratch for the given reference day.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CareSchedule {
    pub marks: CalendarMarks,
    pub stats: CareStats,
    pub today: NaiveDate,
}

impl CareTrack {
    fn completed_dot(&self) -> DotKind {
        match self {
            CareTrack::Watering => DotKind::Watered,
            CareTrack::Fertilizing => DotKind::Fertilized,
        }
    }

    fn due_dot(&self) -> DotKind {
        match self {
            CareTrack::Watering => DotKind::DueWater,
            CareTrack::Fertilizing => DotKind::DueFertilize,
        }
    }

    fn missed_dot(&self) -> DotKind {
        match self {
            CareTrack::Watering => DotKind::MissedWater,
            CareTrack::Fertilizing => DotKind::MissedFertilize,
        }
    }
}

/// Projected future occurrences: `last + k * interval` for every `k >= 1`
/// with `k * interval <= horizon`. Lazy and restartable, purely a function
/// of its inputs.
pub fn project(
    last: NaiveDate,
    interval_days: i64,
    horizon_days: i64,
) -> impl Iterator<Item = NaiveDate> {
    let interval = interval_days.max(1);
    (1..)
        .map(move |k| k * interval)
        .take_while(move |offset| *offset <= horizon_days)
        .map(move |offset| last + Duration::days(offset))
}

/// Single-step next occurrence for a track. A plant never cared for is due
/// immediately, so its next occurrence is the reference day itself.
pub fn next_due(last: Option<NaiveDate>, interval_days: i64, today: NaiveDate) -> NaiveDate {
    match last {
        Some(day) => day + Duration::days(interval_days.max(1)),
        None => today,
    }
}

/// Days until the next occurrence relative to `today`. Zero means due today,
/// negative means overdue.
pub fn days_left(plant: &Plant, track: CareTrack, today: NaiveDate) -> i64 {
    let next = next_due(plant.last_care_day(track), plant.interval(track), today);
    (next - today).num_days()
}

/// Unified due predicate: due when the next occurrence is on or before the
/// reference day. Used identically by the calendar stats and the bulk
/// selector so the two can never disagree.
pub fn is_due(plant: &Plant, track: CareTrack, today: NaiveDate) -> bool {
    days_left(plant, track, today) <= 0
}

/// Selects the plants due or overdue on a track, preserving input order.
/// Drives the bulk "mark all done" action.
pub fn due_plants<'a>(plants: &'a [Plant], track: CareTrack, today: NaiveDate) -> Vec<&'a Plant> {
    plants
        .iter()
        .filter(|plant| is_due(plant, track, today))
        .collect()
}

struct TrackOutcome {
    due: bool,
    completed_this_month: bool,
}

fn apply_track(
    plant: &Plant,
    track: CareTrack,
    today: NaiveDate,
    marks: &mut CalendarMarks,
) -> TrackOutcome {
    let interval = plant.interval(track);

    match plant.last_care_day(track) {
        Some(last) => {
            marks.add_once(last, track.completed_dot());
            let completed_this_month =
                last.year() == today.year() && last.month() == today.month();

            for occurrence in project(last, interval, HORIZON_DAYS) {
                if occurrence < today {
                    marks.add_once(occurrence, track.missed_dot());
                } else {
                    marks.add_once(occurrence, track.due_dot());
                }
            }

            TrackOutcome {
                due: is_due(plant, track, today),
                completed_this_month,
            }
        }
        None => {
            // Never cared for: due immediately, no projection.
            marks.add_once(today, track.due_dot());
            TrackOutcome {
                due: true,
                completed_this_month: false,
            }
        }
    }
}

/// Builds the calendar marking map and stats for the whole plant list.
/// Stateless: same inputs always produce the same output.
pub fn build_schedule(plants: &[Plant], today: NaiveDate) -> CareSchedule {
    let mut marks = CalendarMarks::default();
    let mut stats = CareStats::default();

    for plant in plants {
        let watering = apply_track(plant, CareTrack::Watering, today, &mut marks);
        if watering.due {
            stats.due_water_today += 1;
        }
        if watering.completed_this_month {
            stats.watered_this_month += 1;
        }

        let fertilizing = apply_track(plant, CareTrack::Fertilizing, today, &mut marks);
        if fertilizing.due {
            stats.due_fertilize_today += 1;
        }
        if fertilizing.completed_this_month {
            stats.fertilized_this_month += 1;
        }
    }

    if stats.anything_due() {
        marks.select(today);
    }

    CareSchedule {
        marks,
        stats,
        today,
    }
}

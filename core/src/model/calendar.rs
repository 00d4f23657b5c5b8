use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Status kind of a calendar dot. Each kind carries the color token the
/// presentation layer renders it with.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DotKind {
    Watered,
    DueWater,
    MissedWater,
    Fertilized,
    DueFertilize,
    MissedFertilize,
}

impl DotKind {
    pub fn color(&self) -> &'static str {
        match self {
            DotKind::Watered => "#4caf50",
            DotKind::DueWater => "#ff9800",
            DotKind::MissedWater => "#4584db",
            DotKind::Fertilized => "#9c27b0",
            DotKind::DueFertilize => "#f44336",
            DotKind::MissedFertilize => "#880e4f",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DotKind::Watered => "watered",
            DotKind::DueWater => "due to water",
            DotKind::MissedWater => "missed watering",
            DotKind::Fertilized => "fertilized",
            DotKind::DueFertilize => "due to fertilize",
            DotKind::MissedFertilize => "missed fertilizing",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub kind: DotKind,
    pub color: &'static str,
}

/// Dots for a single calendar day, deduplicated by status kind: a kind is
/// added at most once per day no matter how many plants produce it.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DayMarks {
    pub dots: Vec<Dot>,
    /// Set on today's entry when anything is due, so the presentation layer
    /// highlights the day.
    pub selected: bool,
}

impl DayMarks {
    pub fn add_once(&mut self, kind: DotKind) {
        if !self.dots.iter().any(|d| d.kind == kind) {
            self.dots.push(Dot {
                kind,
                color: kind.color(),
            });
        }
    }

    pub fn has(&self, kind: DotKind) -> bool {
        self.dots.iter().any(|d| d.kind == kind)
    }
}

/// The full calendar marking map, keyed by local calendar day. A `BTreeMap`
/// keeps iteration order deterministic for rendering and tests.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarMarks {
    pub days: BTreeMap<NaiveDate, DayMarks>,
}

impl CalendarMarks {
    pub fn add_once(&mut self, date: NaiveDate, kind: DotKind) {
        self.days.entry(date).or_default().add_once(kind);
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.days.entry(date).or_default().selected = true;
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayMarks> {
        self.days.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_once_dedup() {
        let mut marks = CalendarMarks::default();
        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        marks.add_once(day, DotKind::DueWater);
        marks.add_once(day, DotKind::DueWater);
        marks.add_once(day, DotKind::DueFertilize);

        let entry = marks.get(day).unwrap();
        assert_eq!(entry.dots.len(), 2);
        assert!(entry.has(DotKind::DueWater));
        assert!(entry.has(DotKind::DueFertilize));
    }

    #[test]
    fn test_dot_carries_color() {
        let mut marks = CalendarMarks::default();
        let day = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        marks.add_once(day, DotKind::Watered);
        assert_eq!(marks.get(day).unwrap().dots[0].color, "#4caf50");
    }
}

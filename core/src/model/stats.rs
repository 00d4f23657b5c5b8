use serde::Serialize;

/// Aggregate care statistics for one engine run. Rebuilt from scratch on
/// every computation, never mutated incrementally.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CareStats {
    /// Plants whose last watering falls in the current calendar month.
    pub watered_this_month: usize,
    /// Plants whose last fertilizing falls in the current calendar month.
    pub fertilized_this_month: usize,
    /// Plants due or overdue for watering as of the reference day.
    pub due_water_today: usize,
    /// Plants due or overdue for fertilizing as of the reference day.
    pub due_fertilize_today: usize,
}

impl CareStats {
    pub fn anything_due(&self) -> bool {
        self.due_water_today > 0 || self.due_fertilize_today > 0
    }
}

use anyhow::Result;
use chrono::NaiveDate;
use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, warn};

use crate::backend::PlantBackend;
use crate::model::plant::{CareTrack, Plant};
use crate::schedule::{build_schedule, due_plants, CareSchedule};

/// One failed per-plant update within a bulk action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure {
    pub plant_id: String,
    pub reason: String,
}

/// Aggregate error for a partially failed bulk action. Successes are not
/// rolled back; the error only reports what did not go through.
#[derive(Debug, Error)]
#[error("{} of {attempted} care updates failed", .failures.len())]
pub struct BulkCareError {
    pub attempted: usize,
    pub failures: Vec<BulkFailure>,
}

/// Outcome of a bulk "mark done" action.
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Ids of plants whose update went through, in selection order.
    pub marked: Vec<String>,
    pub failures: Vec<BulkFailure>,
}

impl BulkReport {
    pub fn attempted(&self) -> usize {
        self.marked.len() + self.failures.len()
    }

    /// Collapse into a single aggregate error when any update failed.
    pub fn into_result(self) -> Result<Vec<String>, BulkCareError> {
        if self.failures.is_empty() {
            Ok(self.marked)
        } else {
            Err(BulkCareError {
                attempted: self.marked.len() + self.failures.len(),
                failures: self.failures,
            })
        }
    }
}

/// Orchestrates the engine against the backend: fetch the plant list, run
/// the schedule computation, and drive bulk mark-done actions.
pub struct CareService<B: PlantBackend> {
    backend: B,
}

impl<B: PlantBackend> CareService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn fetch_plants(&self) -> Result<Vec<Plant>> {
        self.backend.list_plants().await
    }

    /// Fetch the current plant list and compute a fresh schedule for the
    /// given reference day.
    pub async fn refresh(&self, today: NaiveDate) -> Result<(Vec<Plant>, CareSchedule)> {
        let plants = self.backend.list_plants().await?;
        let schedule = build_schedule(&plants, today);
        Ok((plants, schedule))
    }

    /// Mark every due or overdue plant on a track as cared for today. All
    /// update requests are fired concurrently and every one is attempted;
    /// individual failures never short-circuit the batch.
    pub async fn mark_all_done(
        &self,
        plants: &[Plant],
        track: CareTrack,
        today: NaiveDate,
    ) -> BulkReport {
        let selected = due_plants(plants, track, today);
        debug!(track = track.label(), count = selected.len(), "bulk mark done");

        let requests = selected.iter().map(|plant| {
            let id = plant.id.clone();
            async move {
                let result = match track {
                    CareTrack::Watering => self.backend.mark_watered(&id).await,
                    CareTrack::Fertilizing => self.backend.mark_fertilized(&id).await,
                };
                (id, result)
            }
        });

        let mut report = BulkReport::default();
        for (id, result) in join_all(requests).await {
            match result {
                Ok(()) => report.marked.push(id),
                Err(err) => {
                    warn!(plant_id = %id, error = %err, "care update failed");
                    report.failures.push(BulkFailure {
                        plant_id: id,
                        reason: err.to_string(),
                    });
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::WireTimestamp;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockBackend {
        plants: Vec<Plant>,
        fail_ids: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl MockBackend {
        fn new(plants: Vec<Plant>) -> Self {
            Self {
                plants,
                fail_ids: HashSet::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(mut self, id: &str) -> Self {
            self.fail_ids.insert(id.to_string());
            self
        }
    }

    #[async_trait]
    impl PlantBackend for MockBackend {
        async fn list_plants(&self) -> Result<Vec<Plant>> {
            Ok(self.plants.clone())
        }

        async fn mark_watered(&self, id: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("water:{}", id));
            if self.fail_ids.contains(id) {
                return Err(anyhow!("backend unavailable"));
            }
            Ok(())
        }

        async fn mark_fertilized(&self, id: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("fertilize:{}", id));
            if self.fail_ids.contains(id) {
                return Err(anyhow!("backend unavailable"));
            }
            Ok(())
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn iso(date: NaiveDate) -> WireTimestamp {
        WireTimestamp::Iso(date.format("%Y-%m-%d").to_string())
    }

    fn plant(id: &str, last_watered: Option<NaiveDate>) -> Plant {
        let mut plant = Plant::new(id, id);
        plant.last_watered = last_watered.map(iso);
        plant
    }

    #[tokio::test]
    async fn test_bulk_marks_only_due_plants() {
        let today = day(2026, 8, 15);
        let plants = vec![
            plant("never", None),
            plant("overdue", Some(today - Duration::days(20))),
            plant("fresh", Some(today - Duration::days(1))),
        ];
        let service = CareService::new(MockBackend::new(plants.clone()));

        let report = service
            .mark_all_done(&plants, CareTrack::Watering, today)
            .await;
        assert_eq!(report.marked, vec!["never", "overdue"]);
        assert!(report.failures.is_empty());

        let calls = service.backend.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert!(!calls.contains(&"water:fresh".to_string()));
    }

    #[tokio::test]
    async fn test_bulk_attempts_all_despite_failures() {
        let today = day(2026, 8, 15);
        let plants = vec![plant("a", None), plant("b", None), plant("c", None)];
        let service = CareService::new(MockBackend::new(plants.clone()).failing("b"));

        let report = service
            .mark_all_done(&plants, CareTrack::Watering, today)
            .await;

        // Every selected plant was attempted, including those after the
        // failing one.
        assert_eq!(service.backend.calls.lock().unwrap().len(), 3);
        assert_eq!(report.marked, vec!["a", "c"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].plant_id, "b");
        assert_eq!(report.attempted(), 3);

        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 care updates failed");
    }

    #[tokio::test]
    async fn test_bulk_size_matches_due_count() {
        let today = day(2026, 8, 15);
        let plants = vec![
            plant("never", None),
            plant("due-today", Some(today - Duration::days(7))),
            plant("fresh", Some(today - Duration::days(2))),
        ];
        let service = CareService::new(MockBackend::new(plants.clone()));

        let (_, schedule) = service.refresh(today).await.unwrap();
        let report = service
            .mark_all_done(&plants, CareTrack::Watering, today)
            .await;
        assert_eq!(schedule.stats.due_water_today, report.attempted());
    }

    #[tokio::test]
    async fn test_fertilizing_track_uses_fertilize_endpoint() {
        let today = day(2026, 8, 15);
        let plants = vec![plant("a", None)];
        let service = CareService::new(MockBackend::new(plants.clone()));

        let report = service
            .mark_all_done(&plants, CareTrack::Fertilizing, today)
            .await;
        assert_eq!(report.marked, vec!["a"]);
        let calls = service.backend.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["fertilize:a"]);
    }
}

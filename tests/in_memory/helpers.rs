//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rewardly::collection::{
    adapters::memory::InMemoryCollectionRepository, services::CollectionCatalogService,
};
use rewardly::goal::{adapters::memory::InMemoryGoalRepository, services::GoalLifecycleService};
use rewardly::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock advancing one minute per reading, so every mutation is observable.
#[derive(Debug, Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        let start = Utc
            .with_ymd_and_hms(2026, 3, 1, 8, 0, 0)
            .single()
            .unwrap_or_default();
        start + TimeDelta::minutes(tick)
    }
}

/// Task service over an in-memory repository.
pub type TaskService = TaskLifecycleService<InMemoryTaskRepository, TickingClock>;

/// Goal service over an in-memory repository.
pub type GoalService = GoalLifecycleService<InMemoryGoalRepository, TickingClock>;

/// Collection service over an in-memory repository.
pub type CatalogService = CollectionCatalogService<InMemoryCollectionRepository, TickingClock>;

/// Provides a fresh task service for each test.
#[fixture]
pub fn task_service() -> TaskService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(TickingClock::default()),
    )
}

/// Provides a fresh goal service for each test.
#[fixture]
pub fn goal_service() -> GoalService {
    GoalLifecycleService::new(
        Arc::new(InMemoryGoalRepository::new()),
        Arc::new(TickingClock::default()),
    )
}

/// Provides a fresh catalogue service for each test.
#[fixture]
pub fn catalog_service() -> CatalogService {
    CollectionCatalogService::new(
        Arc::new(InMemoryCollectionRepository::new()),
        Arc::new(TickingClock::default()),
    )
}

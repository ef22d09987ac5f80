//! In-process shift store.
//!
//! Keeps shifts in a vector behind a `tokio` read/write lock. Window
//! uniqueness is checked while the write lock is held, so two concurrent
//! writes for the same window cannot both succeed.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::checker::MatchPolicy;
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Shift, ShiftDraft, ShiftFilter, ShiftWindow};

use super::ShiftStore;

/// A [`ShiftStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryShiftStore {
    shifts: RwLock<Vec<Shift>>,
    policy: MatchPolicy,
}

impl InMemoryShiftStore {
    /// Creates an empty store enforcing `policy` on writes.
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            shifts: RwLock::new(Vec::new()),
            policy,
        }
    }

    /// Creates a store holding `shifts`.
    ///
    /// Fails if two shifts share an id or collide under `policy`.
    pub fn seeded(policy: MatchPolicy, shifts: Vec<Shift>) -> SchedulerResult<Self> {
        let mut accepted: Vec<Shift> = Vec::with_capacity(shifts.len());
        for shift in shifts {
            if accepted.iter().any(|s| s.id == shift.id) {
                return Err(SchedulerError::Store {
                    message: format!("duplicate shift id '{}'", shift.id),
                });
            }
            check_window(&accepted, policy, None, shift.date, &shift.window())?;
            accepted.push(shift);
        }

        Ok(Self {
            shifts: RwLock::new(accepted),
            policy,
        })
    }

    /// Number of stored shifts.
    pub async fn len(&self) -> usize {
        self.shifts.read().await.len()
    }

    /// Returns true if no shifts are stored.
    pub async fn is_empty(&self) -> bool {
        self.shifts.read().await.is_empty()
    }
}

fn check_window(
    shifts: &[Shift],
    policy: MatchPolicy,
    skip_id: Option<&str>,
    date: NaiveDate,
    window: &ShiftWindow,
) -> SchedulerResult<()> {
    match shifts
        .iter()
        .filter(|s| skip_id != Some(s.id.as_str()))
        .find(|s| policy.conflicts(s, date, window))
    {
        Some(existing) => Err(SchedulerError::WindowConflict {
            date,
            start: window.start.to_string(),
            end: window.end.to_string(),
            existing_id: existing.id.clone(),
        }),
        None => Ok(()),
    }
}

fn not_found(id: &str) -> SchedulerError {
    SchedulerError::ShiftNotFound { id: id.to_string() }
}

#[async_trait]
impl ShiftStore for InMemoryShiftStore {
    async fn find(&self, filter: &ShiftFilter) -> SchedulerResult<Vec<Shift>> {
        let shifts = self.shifts.read().await;
        Ok(shifts.iter().filter(|s| filter.matches(s)).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> SchedulerResult<Shift> {
        let shifts = self.shifts.read().await;
        shifts
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_window(
        &self,
        date: NaiveDate,
        window: &ShiftWindow,
    ) -> SchedulerResult<Option<Shift>> {
        let shifts = self.shifts.read().await;
        Ok(shifts.iter().find(|s| s.occupies(date, window)).cloned())
    }

    async fn find_by_date(&self, date: NaiveDate) -> SchedulerResult<Vec<Shift>> {
        let shifts = self.shifts.read().await;
        Ok(shifts.iter().filter(|s| s.date == date).cloned().collect())
    }

    async fn create(&self, draft: ShiftDraft) -> SchedulerResult<Shift> {
        let mut shifts = self.shifts.write().await;
        check_window(&shifts, self.policy, None, draft.date, &draft.window())?;

        let shift = Shift::from_draft(Uuid::new_v4().to_string(), draft);
        shifts.push(shift.clone());
        Ok(shift)
    }

    async fn update_by_id(&self, id: &str, draft: ShiftDraft) -> SchedulerResult<Shift> {
        let mut shifts = self.shifts.write().await;
        let index = shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;
        check_window(&shifts, self.policy, Some(id), draft.date, &draft.window())?;

        shifts[index] = Shift::from_draft(id, draft);
        Ok(shifts[index].clone())
    }

    async fn delete_by_id(&self, id: &str) -> SchedulerResult<Shift> {
        let mut shifts = self.shifts.write().await;
        let index = shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(shifts.remove(index))
    }
}

//! Persistence for shift records.
//!
//! Handlers never talk to a store directly; they go through
//! [`ShiftService`](crate::usecase::ShiftService). Any backend that
//! implements [`ShiftStore`] can be plugged in.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::SchedulerResult;
use crate::models::{Shift, ShiftDraft, ShiftFilter, ShiftWindow};

pub use memory::InMemoryShiftStore;

/// Data access for shifts.
#[async_trait]
pub trait ShiftStore: Send + Sync {
    /// Lists shifts matching `filter`, in insertion order.
    async fn find(&self, filter: &ShiftFilter) -> SchedulerResult<Vec<Shift>>;

    /// Fetches one shift. A missing id is `SchedulerError::ShiftNotFound`.
    async fn find_by_id(&self, id: &str) -> SchedulerResult<Shift>;

    /// Fetches the shift holding exactly `window` on `date`.
    async fn find_by_window(
        &self,
        date: NaiveDate,
        window: &ShiftWindow,
    ) -> SchedulerResult<Option<Shift>>;

    /// Lists every shift on `date`.
    async fn find_by_date(&self, date: NaiveDate) -> SchedulerResult<Vec<Shift>>;

    /// Persists a new shift and assigns its id.
    async fn create(&self, draft: ShiftDraft) -> SchedulerResult<Shift>;

    /// Replaces the fields of shift `id`.
    async fn update_by_id(&self, id: &str, draft: ShiftDraft) -> SchedulerResult<Shift>;

    /// Removes shift `id`, returning the removed record.
    async fn delete_by_id(&self, id: &str) -> SchedulerResult<Shift>;
}

//! Duplicate-window checking for shifts.
//!
//! Before a shift is created or updated, the checker looks for an existing
//! shift holding the same window on the same date and decides whether the
//! write may proceed.
//!
//! # Match policies
//!
//! - [`MatchPolicy::Exact`] (default): only an identical date, start and end
//!   count as a duplicate. A 10:00-11:00 shift next to a 09:00-17:00 one on
//!   the same day is allowed.
//! - [`MatchPolicy::Overlap`]: any two windows on the same date that share
//!   time conflict (`new_start < existing_end && existing_start < new_end`).
//!   A window running past midnight is split at midnight first, and an
//!   identical window always conflicts, even when it is zero-length.

mod decision;
mod normalize;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{Span, debug};

use crate::error::SchedulerResult;
use crate::models::{Shift, ShiftWindow};
use crate::store::ShiftStore;

pub use decision::{Decision, decide_create, decide_update};
pub use normalize::normalize_date;

/// Which existing shifts count as duplicates of a requested window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Same date, same start and same end.
    #[default]
    Exact,
    /// Same date and intersecting time ranges.
    Overlap,
}

impl MatchPolicy {
    /// Returns true if `existing` blocks `window` on `date` under this policy.
    pub fn conflicts(&self, existing: &Shift, date: NaiveDate, window: &ShiftWindow) -> bool {
        match self {
            MatchPolicy::Exact => existing.occupies(date, window),
            MatchPolicy::Overlap => {
                existing.occupies(date, window)
                    || (existing.date == date && existing.window().overlaps(window))
            }
        }
    }
}

/// Looks up shifts that collide with a requested window.
#[derive(Clone)]
pub struct DuplicateChecker {
    store: Arc<dyn ShiftStore>,
    policy: MatchPolicy,
    span: Span,
}

impl DuplicateChecker {
    /// Creates a checker over `store`, logging under `span`.
    pub fn new(store: Arc<dyn ShiftStore>, policy: MatchPolicy, span: Span) -> Self {
        Self {
            store,
            policy,
            span,
        }
    }

    /// The policy this checker applies.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Returns a shift occupying `window` on `date`, if any.
    ///
    /// Not finding one is the normal answer and yields `Ok(None)`.
    pub async fn check_exists(
        &self,
        date: NaiveDate,
        window: &ShiftWindow,
    ) -> SchedulerResult<Option<Shift>> {
        self.find_conflict(date, window, None).await
    }

    /// Like [`check_exists`](Self::check_exists), ignoring the shift `exclude_id`
    /// under the overlap policy.
    ///
    /// The exact policy never excludes anything so that an update can match
    /// the shift being edited.
    pub async fn find_conflict(
        &self,
        date: NaiveDate,
        window: &ShiftWindow,
        exclude_id: Option<&str>,
    ) -> SchedulerResult<Option<Shift>> {
        let found = match self.policy {
            MatchPolicy::Exact => self.store.find_by_window(date, window).await?,
            MatchPolicy::Overlap => self
                .store
                .find_by_date(date)
                .await?
                .into_iter()
                .filter(|shift| exclude_id != Some(shift.id.as_str()))
                .find(|shift| self.policy.conflicts(shift, date, window)),
        };

        debug!(
            parent: &self.span,
            date = %date,
            window = %window,
            policy = ?self.policy,
            found = found.as_ref().map(|s| s.id.as_str()),
            "Duplicate window lookup"
        );

        Ok(found)
    }
}

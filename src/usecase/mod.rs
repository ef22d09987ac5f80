//! Shift use cases.
//!
//! [`ShiftService`] is what the HTTP layer calls. Reads pass straight
//! through to the store; create and update run the duplicate-window check
//! first and report a duplicate as [`WriteOutcome::Rejected`] rather than
//! as an error.

use std::sync::Arc;

use tracing::{Span, warn};

use crate::checker::{
    Decision, DuplicateChecker, MatchPolicy, decide_create, decide_update, normalize_date,
};
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Shift, ShiftDraft, ShiftFilter, ShiftWindow, TimeOfDay};
use crate::store::ShiftStore;

/// Result of a create or update that did not fail unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The write went through.
    Applied(Shift),
    /// Another shift already holds the window; nothing was written.
    Rejected,
}

/// Entry point for every shift operation.
#[derive(Clone)]
pub struct ShiftService {
    store: Arc<dyn ShiftStore>,
    checker: DuplicateChecker,
    span: Span,
}

impl ShiftService {
    /// Creates a service over `store`.
    ///
    /// `span` is the logging context for the service; the checker logs under
    /// a child of it.
    pub fn new(store: Arc<dyn ShiftStore>, policy: MatchPolicy, span: Span) -> Self {
        let checker_span = tracing::debug_span!(parent: &span, "duplicate_checker");
        Self {
            checker: DuplicateChecker::new(Arc::clone(&store), policy, checker_span),
            store,
            span,
        }
    }

    /// The duplicate-window policy in force.
    pub fn policy(&self) -> MatchPolicy {
        self.checker.policy()
    }

    /// Lists shifts matching `filter`.
    pub async fn find(&self, filter: &ShiftFilter) -> SchedulerResult<Vec<Shift>> {
        self.store.find(filter).await
    }

    /// Fetches a single shift.
    pub async fn find_by_id(&self, id: &str) -> SchedulerResult<Shift> {
        self.store.find_by_id(id).await
    }

    /// Looks up the shift occupying the given raw window, if any.
    pub async fn check_exists(
        &self,
        start_time: &str,
        end_time: &str,
        date: &str,
    ) -> SchedulerResult<Option<Shift>> {
        let date = normalize_date(date)?;
        let window = ShiftWindow::new(
            start_time.parse::<TimeOfDay>()?,
            end_time.parse::<TimeOfDay>()?,
        );
        self.checker.check_exists(date, &window).await
    }

    /// Creates a shift unless its window is already taken.
    pub async fn create(&self, draft: ShiftDraft) -> SchedulerResult<WriteOutcome> {
        let existing = self.checker.check_exists(draft.date, &draft.window()).await?;
        if decide_create(&draft, existing.as_ref()) == Decision::Reject {
            warn!(
                parent: &self.span,
                date = %draft.date,
                window = %draft.window(),
                "Same shift already exists"
            );
            return Ok(WriteOutcome::Rejected);
        }

        let result = self.store.create(draft).await;
        self.settle(result)
    }

    /// Updates shift `id` unless another shift holds the requested window.
    pub async fn update_by_id(&self, id: &str, draft: ShiftDraft) -> SchedulerResult<WriteOutcome> {
        let existing = self
            .checker
            .find_conflict(draft.date, &draft.window(), Some(id))
            .await?;
        if decide_update(id, &draft, existing.as_ref()) == Decision::Reject {
            warn!(
                parent: &self.span,
                id,
                date = %draft.date,
                window = %draft.window(),
                "Same shift already exists"
            );
            return Ok(WriteOutcome::Rejected);
        }

        let result = self.store.update_by_id(id, draft).await;
        self.settle(result)
    }

    /// Deletes a shift, returning the removed record.
    pub async fn delete_by_id(&self, id: &str) -> SchedulerResult<Shift> {
        self.store.delete_by_id(id).await
    }

    /// Maps a store-level window conflict (lost check-then-write race) to a
    /// rejection.
    fn settle(&self, result: SchedulerResult<Shift>) -> SchedulerResult<WriteOutcome> {
        match result {
            Ok(shift) => Ok(WriteOutcome::Applied(shift)),
            Err(SchedulerError::WindowConflict { existing_id, .. }) => {
                warn!(parent: &self.span, existing_id = %existing_id, "Store refused duplicate window");
                Ok(WriteOutcome::Rejected)
            }
            Err(err) => Err(err),
        }
    }
}

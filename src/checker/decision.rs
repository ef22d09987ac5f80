//! Create/update decisions on top of a duplicate-window lookup.
//!
//! The two rules are deliberately asymmetric: create refuses any match,
//! while update lets a shift match itself so that saving an unchanged
//! window is never blocked.

use crate::models::{Shift, ShiftDraft};

/// Whether a write may go ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No conflicting shift; the write may be applied.
    Proceed,
    /// Another shift holds the window; nothing may be written.
    Reject,
}

/// Decides whether `candidate` may be created given the lookup result.
///
/// A match proceeds only if its start, end and date all differ from the
/// candidate's, which an exact lookup never returns.
///
/// # Examples
///
/// ```
/// use shift_scheduler::checker::{decide_create, Decision};
/// use shift_scheduler::models::ShiftDraft;
/// use chrono::NaiveDate;
///
/// let draft = ShiftDraft {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     start_time: "09:00".parse().unwrap(),
///     end_time: "17:00".parse().unwrap(),
///     name: None,
/// };
/// assert_eq!(decide_create(&draft, None), Decision::Proceed);
/// ```
pub fn decide_create(candidate: &ShiftDraft, existing: Option<&Shift>) -> Decision {
    match existing {
        None => Decision::Proceed,
        Some(found)
            if found.start_time != candidate.start_time
                && found.end_time != candidate.end_time
                && found.date != candidate.date =>
        {
            Decision::Proceed
        }
        Some(_) => Decision::Reject,
    }
}

/// Decides whether shift `target_id` may be updated to `candidate`.
pub fn decide_update(target_id: &str, candidate: &ShiftDraft, existing: Option<&Shift>) -> Decision {
    match existing {
        None => Decision::Proceed,
        Some(found)
            if found.id == target_id && found.occupies(candidate.date, &candidate.window()) =>
        {
            Decision::Proceed
        }
        Some(_) => Decision::Reject,
    }
}

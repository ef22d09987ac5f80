//! Core data models for the shift scheduler.
//!
//! This module contains the domain models shared by the store, the
//! duplicate-window checker and the HTTP layer.

mod shift;
mod time_of_day;

pub use shift::{Shift, ShiftDraft, ShiftFilter};
pub use time_of_day::{ShiftWindow, TimeOfDay};

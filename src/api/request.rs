//! Request types for the shift API.

use serde::{Deserialize, Serialize};

use crate::checker::normalize_date;
use crate::error::SchedulerResult;
use crate::models::{ShiftDraft, TimeOfDay};

/// Body of `POST /shifts` and `PUT /shifts/{id}`.
///
/// Values arrive as text and are normalized by [`into_draft`](Self::into_draft);
/// bad dates or times surface as error envelopes rather than JSON rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPayload {
    /// The shift date (`yyyy-MM-dd` or an ISO 8601 timestamp).
    pub date: String,
    /// The start time (`HH:MM`, seconds ignored).
    pub start_time: String,
    /// The end time (`HH:MM`, seconds ignored).
    pub end_time: String,
    /// Optional display label.
    #[serde(default)]
    pub name: Option<String>,
}

impl ShiftPayload {
    /// Normalizes the payload into a draft.
    pub fn into_draft(self) -> SchedulerResult<ShiftDraft> {
        Ok(ShiftDraft {
            date: normalize_date(&self.date)?,
            start_time: self.start_time.parse::<TimeOfDay>()?,
            end_time: self.end_time.parse::<TimeOfDay>()?,
            name: self.name,
        })
    }
}

//! Application state for the shift API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tracing::Span;

use crate::usecase::ShiftService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ShiftService>,
    span: Span,
}

impl AppState {
    /// Creates the state around `service`; handlers log under `span`.
    pub fn new(service: ShiftService, span: Span) -> Self {
        Self {
            service: Arc::new(service),
            span,
        }
    }

    /// Returns the shift service.
    pub fn service(&self) -> &ShiftService {
        &self.service
    }

    /// Returns the handlers' logging span.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

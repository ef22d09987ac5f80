//! HTTP request handlers for the shift API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::SchedulerError;
use crate::models::{Shift, ShiftFilter};
use crate::usecase::WriteOutcome;

use super::request::ShiftPayload;
use super::response::{CREATE_REJECTED, Envelope, ErrorResponse, UPDATE_REJECTED};
use super::state::AppState;

type ApiResult<T> = Result<Envelope<T>, ErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shifts", get(find_handler).post(create_handler))
        .route(
            "/shifts/exists/:start_time/:end_time/:date",
            get(check_exists_handler),
        )
        .route(
            "/shifts/:id",
            get(find_by_id_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .with_state(state)
}

/// Logs a failed operation and turns it into an error envelope.
fn fail(state: &AppState, correlation_id: Uuid, error: SchedulerError) -> ErrorResponse {
    warn!(
        parent: state.span(),
        correlation_id = %correlation_id,
        error = %error,
        "Shift request failed"
    );
    error.into()
}

fn read_body(
    state: &AppState,
    correlation_id: Uuid,
    payload: Result<Json<ShiftPayload>, JsonRejection>,
) -> Result<ShiftPayload, ErrorResponse> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let message = match rejection {
                JsonRejection::JsonDataError(err) => err.body_text(),
                JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                other => other.body_text(),
            };
            warn!(
                parent: state.span(),
                correlation_id = %correlation_id,
                error = %message,
                "Rejected request body"
            );
            Err(ErrorResponse::bad_request(message))
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> Envelope<&'static str> {
    Envelope::ok("Service is healthy", "ok")
}

/// Handler for GET /shifts.
async fn find_handler(
    State(state): State<AppState>,
    filter: Result<Query<ShiftFilter>, QueryRejection>,
) -> ApiResult<Vec<Shift>> {
    let correlation_id = Uuid::new_v4();
    info!(parent: state.span(), correlation_id = %correlation_id, "Find shifts");

    let Query(filter) = filter.map_err(|rejection| {
        warn!(
            parent: state.span(),
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected query"
        );
        ErrorResponse::bad_request(rejection.body_text())
    })?;

    let shifts = state
        .service()
        .find(&filter)
        .await
        .map_err(|e| fail(&state, correlation_id, e))?;
    Ok(Envelope::ok("Get shift successful", shifts))
}

/// Handler for GET /shifts/{id}.
async fn find_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Shift> {
    let correlation_id = Uuid::new_v4();
    info!(parent: state.span(), correlation_id = %correlation_id, id = %id, "Find shift by id");

    let shift = state
        .service()
        .find_by_id(&id)
        .await
        .map_err(|e| fail(&state, correlation_id, e))?;
    Ok(Envelope::ok("Get shift successful", shift))
}

/// Handler for GET /shifts/exists/{startTime}/{endTime}/{date}.
///
/// Returns the shift holding the window, or `null` results when it is free.
async fn check_exists_handler(
    State(state): State<AppState>,
    Path((start_time, end_time, date)): Path<(String, String, String)>,
) -> ApiResult<Option<Shift>> {
    let correlation_id = Uuid::new_v4();
    info!(
        parent: state.span(),
        correlation_id = %correlation_id,
        start_time = %start_time,
        end_time = %end_time,
        date = %date,
        "Check exist shift"
    );

    let found = state
        .service()
        .check_exists(&start_time, &end_time, &date)
        .await
        .map_err(|e| fail(&state, correlation_id, e))?;
    Ok(Envelope::ok("Check exist shift successful", found))
}

/// Handler for POST /shifts.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftPayload>, JsonRejection>,
) -> ApiResult<Option<Shift>> {
    let correlation_id = Uuid::new_v4();
    info!(parent: state.span(), correlation_id = %correlation_id, "Create shift");

    let draft = read_body(&state, correlation_id, payload)?
        .into_draft()
        .map_err(|e| fail(&state, correlation_id, e))?;

    let outcome = state
        .service()
        .create(draft)
        .await
        .map_err(|e| fail(&state, correlation_id, e))?;

    Ok(match outcome {
        WriteOutcome::Applied(shift) => {
            info!(
                parent: state.span(),
                correlation_id = %correlation_id,
                id = %shift.id,
                "Shift created"
            );
            Envelope::ok("Create shift successful", Some(shift))
        }
        WriteOutcome::Rejected => Envelope::rejected(CREATE_REJECTED),
    })
}

/// Handler for PUT /shifts/{id}.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ShiftPayload>, JsonRejection>,
) -> ApiResult<Option<Shift>> {
    let correlation_id = Uuid::new_v4();
    info!(parent: state.span(), correlation_id = %correlation_id, id = %id, "Update shift by id");

    let draft = read_body(&state, correlation_id, payload)?
        .into_draft()
        .map_err(|e| fail(&state, correlation_id, e))?;

    let outcome = state
        .service()
        .update_by_id(&id, draft)
        .await
        .map_err(|e| fail(&state, correlation_id, e))?;

    Ok(match outcome {
        WriteOutcome::Applied(shift) => Envelope::ok("Update shift successful", Some(shift)),
        WriteOutcome::Rejected => Envelope::rejected(UPDATE_REJECTED),
    })
}

/// Handler for DELETE /shifts/{id}.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Shift> {
    let correlation_id = Uuid::new_v4();
    info!(parent: state.span(), correlation_id = %correlation_id, id = %id, "Delete shift by id");

    let removed = state
        .service()
        .delete_by_id(&id)
        .await
        .map_err(|e| fail(&state, correlation_id, e))?;
    Ok(Envelope::ok("Delete shift successful", removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::MatchPolicy;
    use crate::models::ShiftDraft;
    use crate::store::InMemoryShiftStore;
    use crate::usecase::ShiftService;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::Span;

    fn create_test_state() -> AppState {
        let seed = Shift::from_draft(
            "1",
            ShiftDraft {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                start_time: "09:00".parse().unwrap(),
                end_time: "17:00".parse().unwrap(),
                name: None,
            },
        );
        let store = InMemoryShiftStore::seeded(MatchPolicy::Exact, vec![seed]).unwrap();
        let service = ShiftService::new(Arc::new(store), MatchPolicy::Exact, Span::none());
        AppState::new(service, Span::none())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = create_router(create_test_state())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[tokio::test]
    async fn test_each_operation_logs_its_info_line_once() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let router = create_router(create_test_state());
        for (method, uri, body) in [
            ("GET", "/shifts", ""),
            ("GET", "/shifts/1", ""),
            ("GET", "/shifts/exists/09:00/17:00/2024-01-01", ""),
            (
                "POST",
                "/shifts",
                r#"{"date":"2024-01-01","startTime":"09:00","endTime":"17:00"}"#,
            ),
        ] {
            let mut request = Request::builder().method(method).uri(uri);
            if !body.is_empty() {
                request = request.header("Content-Type", "application/json");
            }
            router
                .clone()
                .oneshot(request.body(Body::from(body)).unwrap())
                .await
                .unwrap();
        }

        let text = logs.text();
        for message in [
            "Find shifts",
            "Find shift by id",
            "Check exist shift",
            "Create shift",
        ] {
            let lines = text
                .lines()
                .filter(|line| line.contains(" INFO ") && line.contains(&format!(": {} ", message)))
                .count();
            assert_eq!(lines, 1, "{:?} logged {} times in:\n{}", message, lines, text);
        }
    }

    #[tokio::test]
    async fn test_health_returns_ok_envelope() {
        let (status, body) = send(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], "ok");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400_envelope() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/shifts")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert!(body["message"].as_str().unwrap().contains("Invalid JSON syntax"));
        assert!(body["results"].is_null());
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400_envelope() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/shifts")
                .body(Body::from(
                    r#"{"date":"2024-01-02","startTime":"09:00","endTime":"17:00"}"#,
                ))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Content-Type must be application/json");
    }

    #[tokio::test]
    async fn test_bad_query_returns_400_envelope() {
        let (status, body) = send(
            Request::builder()
                .uri("/shifts?date=not-a-date")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
    }

    #[tokio::test]
    async fn test_invalid_date_in_body_returns_400_envelope() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/shifts")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"date":"someday","startTime":"09:00","endTime":"17:00"}"#,
                ))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid date"));
    }
}

//! Router for the attendees API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, patch},
};
use axum_extra::extract::Query;

use super::public;
use crate::api::state::AppState;
use crate::attendees::{find_attendee_by_email, group_by_firm, list_attendees, update_profile};

type SharedState = Arc<RwLock<AppState>>;

fn not_found(email: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("No attendee with email {}", email),
    )
        .into_response()
}

/// Browse attendees, optionally searching and filtering by type. The
/// same listing is also returned grouped by firm.
async fn directory(
    State(state): State<SharedState>,
    Query(params): Query<public::DirectoryQuery>,
) -> Result<Json<public::DirectoryResponse>, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let attendees =
        list_attendees(&db, params.q.as_deref(), params.attendee_type.as_deref()).await?;
    let firms = group_by_firm(&attendees);
    Ok(Json(public::DirectoryResponse { attendees, firms }))
}

async fn view_attendee(
    State(state): State<SharedState>,
    Path(email): Path<String>,
) -> Result<Response, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let resp = match find_attendee_by_email(&db, &email).await? {
        Some(attendee) => Json(attendee).into_response(),
        None => not_found(&email),
    };
    Ok(resp)
}

async fn edit_profile(
    State(state): State<SharedState>,
    Path(email): Path<String>,
    Json(payload): Json<public::ProfileUpdate>,
) -> Result<Response, crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let resp = match update_profile(&db, &email, payload).await? {
        Some(attendee) => Json(attendee).into_response(),
        None => not_found(&email),
    };
    Ok(resp)
}

/// Create the attendees router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(directory))
        .route("/{email}", get(view_attendee))
        .route("/{email}/profile", patch(edit_profile))
}

//! Router for the meetings API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use axum_extra::extract::Query;

use super::public;
use crate::api::routes::target_firmandname;
use crate::api::state::AppState;
use crate::meetings::{NewMeeting, find_meetings, insert_meeting};

type SharedState = Arc<RwLock<AppState>>;

/// List the meetings of an attendee. Responds with 502 and the partial
/// results when the meetings table could not be read.
async fn list_meetings(
    State(state): State<SharedState>,
    Query(params): Query<public::MeetingsQuery>,
) -> Result<(StatusCode, Json<public::MeetingsResponse>), crate::api::public::ApiError> {
    let db = state.read().unwrap().db.clone();
    let key = target_firmandname(&db, params.firmandname, params.email).await?;
    let search = find_meetings(&db, key.as_deref()).await;

    let status = if search.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((status, Json(search.into())))
}

async fn create_meeting(
    State(state): State<SharedState>,
    Json(payload): Json<NewMeeting>,
) -> Result<Response, crate::api::public::ApiError> {
    if payload.end_time <= payload.start_time {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Meeting end_time must be after start_time",
        )
            .into_response());
    }

    let db = state.read().unwrap().db.clone();
    let meeting = insert_meeting(&db, payload).await?;
    tracing::info!(
        "Created meeting {} between {} and {}",
        meeting.id,
        meeting.attendee1_firmandname,
        meeting.attendee2_firmandname
    );

    Ok((StatusCode::CREATED, Json(meeting)).into_response())
}

/// Create the meetings router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_meetings).post(create_meeting))
}

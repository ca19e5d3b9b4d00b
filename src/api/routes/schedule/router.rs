//! Router for the schedule API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, http::StatusCode, response::Json};
use axum_extra::extract::Query;

use super::public;
use crate::agenda::AGENDA;
use crate::api::routes::target_firmandname;
use crate::api::state::AppState;
use crate::attendees::attendee_type_map;
use crate::meetings::find_meetings;
use crate::schedule::{build_grid, summit_block_for};

type SharedState = Arc<RwLock<AppState>>;

async fn schedule_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::ScheduleQuery>,
) -> Result<(StatusCode, Json<public::ScheduleResponse>), crate::api::public::ApiError> {
    let (db, event_days) = {
        let shared_state = state.read().expect("Unable to read share state");
        (
            shared_state.db.clone(),
            shared_state.config.event_days.clone(),
        )
    };

    let key = target_firmandname(&db, params.firmandname, params.email).await?;
    let search = find_meetings(&db, key.as_deref()).await;

    // Types only decorate the grid so a failure here is not fatal
    let attendee_types = attendee_type_map(&db).await.unwrap_or_else(|err| {
        tracing::warn!("Failed to load attendee types: {}", err);
        Default::default()
    });

    // The viewer's own type decides the summit block, not the override
    // target's
    let viewer_type = key
        .as_deref()
        .and_then(|k| attendee_types.get(k.trim()))
        .map(String::as_str);
    let block = summit_block_for(viewer_type);

    let rows = build_grid(
        &search.meetings,
        &event_days,
        &attendee_types,
        block.as_ref(),
    );
    let days = event_days
        .iter()
        .map(|date| public::ScheduleDay {
            date: *date,
            label: date.format("%A, %B %-d").to_string(),
        })
        .collect();

    let status = if search.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((
        status,
        Json(public::ScheduleResponse {
            search_key: search.search_key,
            days,
            rows,
            error: search.error.map(|e| e.to_string()),
        }),
    ))
}

async fn agenda_handler() -> Json<&'static [public::AgendaDay]> {
    Json(AGENDA)
}

/// Create the schedule router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(schedule_handler))
        .route("/agenda", axum::routing::get(agenda_handler))
}

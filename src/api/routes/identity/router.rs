//! Router for the identity API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, response::Json};
use axum_extra::extract::Query;

use super::public;
use crate::api::state::AppState;
use crate::identity::resolve_meeting_key;

type SharedState = Arc<RwLock<AppState>>;

async fn resolve_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::ResolveQuery>,
) -> Json<public::ResolveResponse> {
    let db = state.read().unwrap().db.clone();
    let meetings_firmandname = resolve_meeting_key(&db, params.firmandname.as_deref()).await;

    Json(public::ResolveResponse {
        firmandname: params.firmandname,
        meetings_firmandname,
    })
}

/// Create the identity router
pub fn router() -> Router<SharedState> {
    Router::new().route("/resolve", axum::routing::get(resolve_handler))
}

//! API routes module

pub mod attendees;
pub mod identity;
pub mod meetings;
pub mod schedule;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Attendee lookup and profile routes
        .nest("/attendees", attendees::router())
        // Identity override resolution
        .nest("/identity", identity::router())
        // Meeting lookup and creation
        .nest("/meetings", meetings::router())
        // Calendar grid
        .nest("/schedule", schedule::router())
}

/// Identity key of the attendee a request is about. An explicit key
/// wins over an email, which is looked up in the attendees table. An
/// unknown email or an attendee without a key means there is nobody
/// to look up, not an error.
pub(crate) async fn target_firmandname(
    db: &tokio_rusqlite::Connection,
    firmandname: Option<String>,
    email: Option<String>,
) -> anyhow::Result<Option<String>> {
    if let Some(key) = firmandname.filter(|k| !k.is_empty()) {
        return Ok(Some(key));
    }
    let Some(email) = email.filter(|e| !e.is_empty()) else {
        return Ok(None);
    };
    let attendee = crate::attendees::find_attendee_by_email(db, &email).await?;
    Ok(attendee.and_then(|a| a.firmandname))
}

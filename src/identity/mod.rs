//! Identity keys and the resolver that maps an attendee's public key
//! onto the key their meetings were scheduled under.
pub mod db;
pub mod models;
pub use db::*;
pub use models::*;

use tokio_rusqlite::Connection;

/// Resolve the key to search the meetings table with.
///
/// Empty or missing input yields `None`. A failed override lookup is
/// logged and falls back to the original key so meeting search can
/// still go ahead.
pub async fn resolve_meeting_key(db: &Connection, attendee_key: Option<&str>) -> Option<String> {
    let key = attendee_key.filter(|k| !k.is_empty())?;

    match find_override(db, key).await {
        Ok(Some(target)) if !target.is_empty() => {
            tracing::debug!("Using override {} -> {}", key, target);
            Some(target)
        }
        Ok(_) => {
            tracing::debug!("No override for {}", key);
            Some(key.to_string())
        }
        Err(err) => {
            tracing::warn!("Override lookup failed for {}, using original key: {}", key, err);
            Some(key.to_string())
        }
    }
}

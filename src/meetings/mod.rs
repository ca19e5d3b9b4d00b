//! Meeting lookup for an attendee.
pub mod db;
pub mod display;
pub mod models;
pub use db::*;
pub use display::*;
pub use models::*;

use tokio_rusqlite::Connection;

use crate::identity::resolve_meeting_key;

/// Find every meeting the attendee takes part in.
///
/// The key is resolved through the override table first, then the
/// meetings table is searched once per participant column. Slot 1
/// matches come first followed by slot 2 matches, each ordered by
/// start time. A meeting with the same key in both columns shows up
/// once per slot.
///
/// Lookup faults are returned in `MeetingSearch::error` alongside any
/// meetings that did load.
pub async fn find_meetings(db: &Connection, attendee_key: Option<&str>) -> MeetingSearch {
    let Some(search_key) = resolve_meeting_key(db, attendee_key).await else {
        tracing::debug!("No identity to search meetings for");
        return MeetingSearch::default();
    };

    let mut meetings = Vec::new();
    let mut error = None;

    for slot in [AttendeeSlot::Attendee1, AttendeeSlot::Attendee2] {
        match meetings_for_slot(db, &search_key, slot).await {
            Ok(found) => {
                meetings.extend(found.into_iter().map(|m| ResolvedMeeting::new(m, slot)));
            }
            Err(source) => {
                tracing::error!("Meeting lookup by {} failed for {}: {}", slot, search_key, source);
                // Keep the first fault
                if error.is_none() {
                    error = Some(LookupError::Slot { slot, source });
                }
            }
        }
    }

    tracing::debug!(
        "Found {} meetings for {} (error: {})",
        meetings.len(),
        search_key,
        error.is_some()
    );

    MeetingSearch {
        search_key: Some(search_key),
        meetings,
        error,
    }
}

//! Public types for the meetings API
use serde::{Deserialize, Serialize};

use crate::meetings::{MeetingSearch, ResolvedMeeting};

/// Either an identity key or the email of an attendee. Admins pass
/// another attendee's email to see their meetings.
#[derive(Deserialize)]
pub struct MeetingsQuery {
    pub firmandname: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MeetingsResponse {
    pub search_key: Option<String>,
    pub meetings: Vec<ResolvedMeeting>,
    /// Set when a lookup failed. `meetings` then holds whatever did load.
    pub error: Option<String>,
}

impl From<MeetingSearch> for MeetingsResponse {
    fn from(search: MeetingSearch) -> Self {
        Self {
            search_key: search.search_key,
            meetings: search.meetings,
            error: search.error.map(|e| e.to_string()),
        }
    }
}

//! Public types for the attendees API
use serde::{Deserialize, Serialize};

pub use crate::attendees::{Attendee, FirmGroup, ProfileUpdate};

#[derive(Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub attendee_type: Option<String>,
}

#[derive(Serialize)]
pub struct DirectoryResponse {
    pub attendees: Vec<Attendee>,
    pub firms: Vec<FirmGroup>,
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which participant column of a meeting row the caller occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendeeSlot {
    #[serde(rename = "attendee1")]
    Attendee1,
    #[serde(rename = "attendee2")]
    Attendee2,
}

impl AttendeeSlot {
    pub fn column(&self) -> &'static str {
        match self {
            AttendeeSlot::Attendee1 => "attendee1_firmandname",
            AttendeeSlot::Attendee2 => "attendee2_firmandname",
        }
    }

    pub fn other(&self) -> AttendeeSlot {
        match self {
            AttendeeSlot::Attendee1 => AttendeeSlot::Attendee2,
            AttendeeSlot::Attendee2 => AttendeeSlot::Attendee1,
        }
    }
}

impl fmt::Display for AttendeeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendeeSlot::Attendee1 => write!(f, "attendee1"),
            AttendeeSlot::Attendee2 => write!(f, "attendee2"),
        }
    }
}

/// A row of the `meetings` table. Times are stored in UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub attendee1_firmandname: String,
    pub attendee2_firmandname: String,
    pub table_number: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Meeting {
    pub fn key_in(&self, slot: AttendeeSlot) -> &str {
        match slot {
            AttendeeSlot::Attendee1 => &self.attendee1_firmandname,
            AttendeeSlot::Attendee2 => &self.attendee2_firmandname,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMeeting {
    pub attendee1_firmandname: String,
    pub attendee2_firmandname: String,
    pub table_number: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A meeting tagged with the slot the querying attendee was found in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMeeting {
    #[serde(flatten)]
    pub meeting: Meeting,
    #[serde(rename = "currentUserIsAttendee")]
    pub current_user_is_attendee: AttendeeSlot,
}

impl ResolvedMeeting {
    pub fn new(meeting: Meeting, slot: AttendeeSlot) -> Self {
        Self {
            meeting,
            current_user_is_attendee: slot,
        }
    }

    /// Key of the other participant.
    pub fn counterpart_key(&self) -> &str {
        self.meeting.key_in(self.current_user_is_attendee.other())
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Meeting lookup by {slot} failed: {source}")]
    Slot {
        slot: AttendeeSlot,
        #[source]
        source: anyhow::Error,
    },
}

/// Result of a meeting search. `meetings` holds whatever was loaded
/// even when `error` is set so callers can tell "no meetings" apart
/// from "could not load meetings".
#[derive(Debug, Default)]
pub struct MeetingSearch {
    pub search_key: Option<String>,
    pub meetings: Vec<ResolvedMeeting>,
    pub error: Option<LookupError>,
}

impl MeetingSearch {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

//! The conference agenda shown to every attendee.
use serde::Serialize;

const CONFERENCE_FLOOR: &str = "333 South Wabash Avenue, 3rd Floor, Chicago, IL 60604";
const SUMMIT_FLOOR: &str = "333 South Wabash Avenue, 44th Floor, Chicago, IL 60604";

pub const FOUNDER_SUMMIT_TITLE: &str = "Founder Summit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgendaEvent {
    /// Venue wall-clock time or range, e.g. `9:00 AM - 4:00 PM`.
    pub time: &'static str,
    pub title: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgendaDay {
    /// `YYYY-MM-DD` in venue time.
    pub date: &'static str,
    pub label: &'static str,
    pub events: &'static [AgendaEvent],
}

pub static AGENDA: &[AgendaDay] = &[
    AgendaDay {
        date: "2025-08-20",
        label: "August 20, 2025",
        events: &[
            AgendaEvent {
                time: "8:00 AM",
                title: "Sign In Opens",
                location: CONFERENCE_FLOOR,
            },
            AgendaEvent {
                time: "9:00 AM - 4:00 PM",
                title: "1:1 Meetings",
                location: CONFERENCE_FLOOR,
            },
            AgendaEvent {
                time: "4:30 PM - 7:30 PM",
                title: "Founder & Investor Happy Hour",
                location: "Millennium Hall Restaurant, 11 N Michigan Ave, Chicago, IL 60602",
            },
            AgendaEvent {
                time: "7:00 PM - 10:00 PM",
                title: "Founder Dinner",
                location: "The Marq, 60 W Adams St, Chicago, IL 60603",
            },
            AgendaEvent {
                time: "7:00 PM - 10:00 PM",
                title: "Investor Dinner",
                location: "The Gage, 24 S Michigan Ave, Chicago, IL 60603",
            },
        ],
    },
    AgendaDay {
        date: "2025-08-21",
        label: "August 21, 2025",
        events: &[
            AgendaEvent {
                time: "8:30 AM",
                title: "Sign In Continues",
                location: CONFERENCE_FLOOR,
            },
            AgendaEvent {
                time: "9:00 AM - 4:00 PM",
                title: "1:1 Meetings",
                location: CONFERENCE_FLOOR,
            },
            AgendaEvent {
                time: "10:00 AM - 4:00 PM",
                title: FOUNDER_SUMMIT_TITLE,
                location: SUMMIT_FLOOR,
            },
            AgendaEvent {
                time: "4:30 PM - 9:00 PM",
                title: "Official Club M25 Afterparties",
                location: "The Game Room, 12 S Michigan Ave, 2nd Floor, Chicago, IL 60603",
            },
        ],
    },
];

/// The agenda entry for `title`, with the day it is on.
pub fn find_event(title: &str) -> Option<(&'static AgendaDay, &'static AgendaEvent)> {
    AGENDA.iter().find_map(|day| {
        day.events
            .iter()
            .find(|event| event.title == title)
            .map(|event| (day, event))
    })
}

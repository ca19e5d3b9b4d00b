//! Calendar grid for the venue day and the test for which meeting
//! falls in a given half-hour slot.
//!
//! The grid is labelled in venue wall-clock time while meetings are
//! stored in UTC. The venue is treated as a fixed UTC-5 offset for the
//! whole event; `to_utc` is the only place that knows this.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result, anyhow};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};
use serde::Serialize;

use crate::agenda::{FOUNDER_SUMMIT_TITLE, find_event};
use crate::meetings::{MeetingDisplay, ResolvedMeeting};

/// Venue offset from UTC in hours. No daylight saving adjustment.
pub const VENUE_UTC_OFFSET_HOURS: i64 = -5;

pub const SLOT_MINUTES: i64 = 30;

const FIRST_SLOT_HOUR: u32 = 9;
const LAST_SLOT_HOUR: u32 = 16;

/// A venue wall-clock time as shown on the grid, e.g. `9:00 AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayTime(NaiveTime);

impl DisplayTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for DisplayTime {
    type Err = Error;

    /// Parse a 12-hour label. `12:xx AM` is just after midnight and
    /// `12:xx PM` just after noon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (clock, meridiem) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("Missing AM/PM in time label \"{}\"", s))?;
        let (hour, minute) = clock
            .split_once(':')
            .ok_or_else(|| anyhow!("Missing minutes in time label \"{}\"", s))?;
        let hour: u32 = hour.parse()?;
        let minute: u32 = minute.parse()?;
        if !(1..=12).contains(&hour) {
            return Err(anyhow!("Hour out of range in time label \"{}\"", s));
        }

        let hour24 = match meridiem.trim() {
            "AM" => hour % 12,
            "PM" => hour % 12 + 12,
            other => return Err(anyhow!("Unknown meridiem \"{}\" in \"{}\"", other, s)),
        };

        DisplayTime::new(hour24, minute)
            .ok_or_else(|| anyhow!("Minutes out of range in time label \"{}\"", s))
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (is_pm, hour12) = self.0.hour12();
        let meridiem = if is_pm { "PM" } else { "AM" };
        write!(f, "{}:{:02} {}", hour12, self.0.minute(), meridiem)
    }
}

/// Convert a venue wall-clock time on `date` to a UTC instant.
pub fn to_utc(time: DisplayTime, date: NaiveDate) -> DateTime<Utc> {
    date.and_time(time.0).and_utc() - Duration::hours(VENUE_UTC_OFFSET_HOURS)
}

/// Half-open UTC window `[start, end)` covered by the display slot.
pub fn slot_window(time: DisplayTime, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = to_utc(time, date);
    (start, start + Duration::minutes(SLOT_MINUTES))
}

/// A meeting that ends exactly when the window starts, or starts exactly
/// when it ends, does not overlap.
pub fn overlaps(meeting: &ResolvedMeeting, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    meeting.meeting.start_time < end && meeting.meeting.end_time > start
}

/// The first meeting overlapping the display slot at `time` on `date`.
///
/// Assumes an attendee has at most one meeting per slot; any further
/// overlapping meetings are not reported.
pub fn occurs_at(
    meetings: &[ResolvedMeeting],
    time: DisplayTime,
    date: NaiveDate,
) -> Option<&ResolvedMeeting> {
    let (start, end) = slot_window(time, date);
    meetings.iter().find(|m| overlaps(m, start, end))
}

/// Grid labels from 9:00 AM through 4:00 PM every half hour.
pub fn display_slots() -> Vec<DisplayTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .flat_map(|hour| [(hour, 0), (hour, 30)])
        .filter(|(hour, minute)| *hour < LAST_SLOT_HOUR || *minute == 0)
        .filter_map(|(hour, minute)| DisplayTime::new(hour, minute))
        .collect()
}

/// Display slots on one event day the viewer spends at an agenda event
/// rather than at the 1:1 tables, from `first` through `last` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummitBlock {
    pub date: NaiveDate,
    pub first: DisplayTime,
    pub last: DisplayTime,
}

impl SummitBlock {
    /// Block out the agenda event called `title`. Its time must be a
    /// `H:MM AM - H:MM PM` range.
    pub fn from_agenda(title: &str) -> Result<Self> {
        let (day, event) =
            find_event(title).ok_or_else(|| anyhow!("No agenda event \"{}\"", title))?;
        let date = NaiveDate::parse_from_str(day.date, "%Y-%m-%d")?;
        let (first, last) = event
            .time
            .split_once(" - ")
            .ok_or_else(|| anyhow!("Agenda event \"{}\" has no time range", title))?;

        Ok(Self {
            date,
            first: first.parse()?,
            last: last.parse()?,
        })
    }

    pub fn covers(&self, time: DisplayTime, date: NaiveDate) -> bool {
        date == self.date && (self.first..=self.last).contains(&time)
    }
}

/// Founders are at the Founder Summit for part of the second day so
/// their grid is blocked out there. Everyone else has no block.
pub fn summit_block_for(viewer_type: Option<&str>) -> Option<SummitBlock> {
    let is_founder = viewer_type.is_some_and(|t| t.trim().eq_ignore_ascii_case("founder"));
    if !is_founder {
        return None;
    }
    SummitBlock::from_agenda(FOUNDER_SUMMIT_TITLE)
        .inspect_err(|err| tracing::warn!("Founder Summit block unavailable: {}", err))
        .ok()
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub meeting_id: Option<i64>,
    pub meeting: Option<MeetingDisplay>,
    /// Set when the slot falls in the viewer's summit block. Any meeting
    /// there is not shown.
    pub summit_block: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub time: String,
    pub cells: Vec<GridCell>,
}

/// Lay out the attendee's meetings on the display slot × event day grid.
pub fn build_grid(
    meetings: &[ResolvedMeeting],
    days: &[NaiveDate],
    attendee_types: &HashMap<String, String>,
    block: Option<&SummitBlock>,
) -> Vec<GridRow> {
    display_slots()
        .into_iter()
        .map(|time| GridRow {
            time: time.to_string(),
            cells: days
                .iter()
                .map(|date| {
                    let summit_block = block.is_some_and(|b| b.covers(time, *date));
                    let found = occurs_at(meetings, time, *date).filter(|_| !summit_block);
                    GridCell {
                        date: *date,
                        meeting_id: found.map(|m| m.meeting.id),
                        meeting: found.map(|m| MeetingDisplay::from_meeting(m, attendee_types)),
                        summit_block,
                    }
                })
                .collect(),
        })
        .collect()
}

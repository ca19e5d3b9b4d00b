//! Public types for the schedule API
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::agenda::{AgendaDay, AgendaEvent};
use crate::schedule::GridRow;

#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub firmandname: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub label: String,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub search_key: Option<String>,
    pub days: Vec<ScheduleDay>,
    pub rows: Vec<GridRow>,
    pub error: Option<String>,
}

// Calendar-day truncation and the date/time parsing used by the report and record editor.
//
// All truncation stays in the timezone of the input so one aggregation never mixes offsets.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::modules::tracking::core::errors::TrackingError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// 00:00:00 of the calendar day `at` falls on.
pub fn start_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    at_time_of_day(at, NaiveTime::MIN)
}

/// 23:59:59 of the calendar day `at` falls on.
pub fn end_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> DateTime<Tz> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    at_time_of_day(at, last_second)
}

fn at_time_of_day<Tz: TimeZone>(at: &DateTime<Tz>, time: NaiveTime) -> DateTime<Tz> {
    let naive = at.date_naive().and_time(time);
    at.timezone()
        .from_local_datetime(&naive)
        .earliest()
        // Wall time skipped by a DST jump; shift by the same offset instead.
        .unwrap_or_else(|| at.clone() + (time - at.time()))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, TrackingError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| TrackingError::InvalidInput(format!("parsing date {value:?}: {e}")))
}

/// Combines a `YYYY-MM-DD` date and an `HH:MM` time into a local timestamp.
pub fn parse_local_date_time(date: &str, time: &str) -> Result<DateTime<Local>, TrackingError> {
    let date = parse_date(date)?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
        .map_err(|e| TrackingError::InvalidInput(format!("parsing time {time:?}: {e}")))?;
    let naive = NaiveDateTime::new(date, time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TrackingError::InvalidInput(format!("parsing time {naive}: no such local time")))
}

/// Local midnight of `date`.
pub fn local_midnight(date: NaiveDate) -> Result<DateTime<Local>, TrackingError> {
    let naive = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            // Midnight skipped by a DST jump: the day starts an hour later.
            Local
                .from_local_datetime(&(naive + chrono::TimeDelta::hours(1)))
                .earliest()
        })
        .ok_or_else(|| TrackingError::InvalidInput(format!("no local midnight for {date}")))
}

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The kind of work event a timestamp records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    CheckIn,
    CheckOut,
    BreakStart,
    BreakEnd,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single timestamped work event.
///
/// Events are the only persisted facts; every daily, weekly and monthly
/// figure is derived from the event list. `timestamp_ms` is epoch millis in
/// local time and is the ordering key; `date` and `time` are the calendar
/// projection used for grouping and display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkEvent {
    pub id: String,
    pub kind: EventKind,
    pub timestamp_ms: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub synced: bool,
    pub is_holiday: bool,
}

impl WorkEvent {
    /// Creates an unsynced event for the given date and clock time.
    pub fn new(kind: EventKind, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: next_event_id("evt"),
            kind,
            timestamp_ms: local_timestamp_ms(date, time),
            date,
            time,
            synced: false,
            is_holiday: false,
        }
    }

    /// Creates a holiday-flagged event (part of the synthetic holiday pair).
    pub fn holiday(kind: EventKind, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: next_event_id("holiday"),
            is_holiday: true,
            ..Self::new(kind, date, time)
        }
    }
}

/// Epoch milliseconds for a local-time date + clock combination.
///
/// Falls back to the UTC interpretation for the rare local times that do not
/// exist (DST gaps), so ordering stays total.
pub fn local_timestamp_ms(date: NaiveDate, time: NaiveTime) -> i64 {
    let naive = date.and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Mints an opaque event id from epoch millis and a process-wide counter.
pub fn next_event_id(prefix: &str) -> String {
    static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = EVENT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}_{:x}_{:x}", prefix, Local::now().timestamp_millis(), seq)
}

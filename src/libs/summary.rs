use crate::libs::event::{EventKind, WorkEvent};
use crate::store::breaks::BreakTable;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// One derived record per calendar date. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub is_holiday: bool,
    pub break_counted: bool,
    pub break_minutes: Option<u32>,
}

impl DailySummary {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            check_in: None,
            check_out: None,
            break_start: None,
            break_end: None,
            is_holiday: false,
            break_counted: false,
            break_minutes: None,
        }
    }
}

/// Reduces the event list to one summary per date.
///
/// Events are walked in ascending timestamp order (stable, so equal
/// timestamps keep list order). The first check-in and first break-start of
/// a day win; the last check-out and last break-end win. Any holiday-flagged
/// event marks the whole day. The break side-table is joined once per date.
pub fn aggregate_daily(events: &[WorkEvent], breaks: &impl BreakTable) -> BTreeMap<NaiveDate, DailySummary> {
    let mut ordered: Vec<&WorkEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.timestamp_ms);

    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();
    for event in ordered {
        let day = days.entry(event.date).or_insert_with(|| DailySummary::new(event.date));
        match event.kind {
            EventKind::CheckIn => {
                if day.check_in.is_none() {
                    day.check_in = Some(event.time);
                }
            }
            EventKind::CheckOut => day.check_out = Some(event.time),
            EventKind::BreakStart => {
                if day.break_start.is_none() {
                    day.break_start = Some(event.time);
                }
            }
            EventKind::BreakEnd => day.break_end = Some(event.time),
        }
        if event.is_holiday {
            day.is_holiday = true;
        }
    }

    for (date, day) in days.iter_mut() {
        day.break_counted = breaks.break_counted(*date);
        day.break_minutes = breaks.break_minutes(*date);
    }
    days
}

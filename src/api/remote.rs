use crate::libs::event::{EventKind, WorkEvent};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The per-date document stored under a user's remote namespace.
///
/// Each event kind occupies an optional (clock, epoch-millis) field pair;
/// the document is keyed by the [`date_doc_id`] transform of its date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteDayRecord {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<chrono::NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<chrono::NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_start: Option<chrono::NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_start_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_end: Option<chrono::NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_end_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_counted: Option<bool>,
}

impl RemoteDayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            check_in: None,
            check_in_ts: None,
            check_out: None,
            check_out_ts: None,
            break_start: None,
            break_start_ts: None,
            break_end: None,
            break_end_ts: None,
            is_holiday: false,
            break_counted: None,
        }
    }

    /// Folds one local event into the document.
    ///
    /// Check-in and check-out overwrite unconditionally; the first break
    /// start wins while a later break end overwrites, mirroring the daily
    /// aggregation rules.
    pub fn merge_event(&mut self, event: &WorkEvent) {
        match event.kind {
            EventKind::CheckIn => {
                self.check_in = Some(event.time);
                self.check_in_ts = Some(event.timestamp_ms);
                self.is_holiday = self.is_holiday || event.is_holiday;
            }
            EventKind::CheckOut => {
                self.check_out = Some(event.time);
                self.check_out_ts = Some(event.timestamp_ms);
                self.is_holiday = self.is_holiday || event.is_holiday;
            }
            EventKind::BreakStart => {
                if self.break_start.is_none() {
                    self.break_start = Some(event.time);
                    self.break_start_ts = Some(event.timestamp_ms);
                }
            }
            EventKind::BreakEnd => {
                self.break_end = Some(event.time);
                self.break_end_ts = Some(event.timestamp_ms);
            }
        }
    }

    /// Synthesizes one already-synced local event per populated field pair.
    pub fn events(&self) -> Vec<WorkEvent> {
        let doc_id = date_doc_id(self.date);
        let fields = [
            (EventKind::CheckIn, self.check_in, self.check_in_ts, self.is_holiday),
            (EventKind::CheckOut, self.check_out, self.check_out_ts, self.is_holiday),
            (EventKind::BreakStart, self.break_start, self.break_start_ts, false),
            (EventKind::BreakEnd, self.break_end, self.break_end_ts, false),
        ];
        fields
            .into_iter()
            .filter_map(|(kind, time, ts, is_holiday)| {
                let (time, timestamp_ms) = (time?, ts?);
                Some(WorkEvent {
                    id: format!("remote_{}_{}", doc_id, kind),
                    kind,
                    timestamp_ms,
                    date: self.date,
                    time,
                    synced: true,
                    is_holiday,
                })
            })
            .collect()
    }
}

/// Remote document id for a date, `DD_MM_YYYY`.
pub fn date_doc_id(date: NaiveDate) -> String {
    date.format("%d_%m_%Y").to_string()
}

/// Inverse of [`date_doc_id`].
pub fn doc_id_date(doc_id: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(doc_id, "%d_%m_%Y").ok()
}

/// The remote account the reconciler pushes to and pulls from.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// The signed-in user, or `None` when there is no session.
    fn user_id(&self) -> Option<String>;
    async fn fetch_day(&self, user: &str, date: NaiveDate) -> Result<Option<RemoteDayRecord>>;
    async fn store_day(&self, user: &str, record: &RemoteDayRecord) -> Result<()>;
    async fn fetch_all(&self, user: &str) -> Result<Vec<RemoteDayRecord>>;
}

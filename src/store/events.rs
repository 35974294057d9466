//! Event store interface and the in-memory reference implementation.
//!
//! The event list is the single persisted source of truth. The store trait
//! is deliberately narrow (read-all, write-all, append, patch-by-id); the
//! higher-level day operations — import upsert, holiday marking, erasure —
//! are provided methods built on top of it so every implementation gets them
//! for free.

use crate::libs::event::{local_timestamp_ms, next_event_id, EventKind, WorkEvent};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;

/// Partial update for a stored event.
#[derive(Clone, Debug, Default)]
pub struct EventPatch {
    pub time: Option<NaiveTime>,
    pub timestamp_ms: Option<i64>,
    pub synced: Option<bool>,
    pub is_holiday: Option<bool>,
}

/// Minimal persisted-event interface the engine consumes.
pub trait EventStore {
    fn read_all(&self) -> Result<Vec<WorkEvent>>;
    fn write_all(&self, events: Vec<WorkEvent>) -> Result<()>;
    fn append(&self, event: WorkEvent) -> Result<()>;
    /// Applies the patch to the event with the given id; `Ok(false)` when no
    /// such event exists.
    fn update_by_id(&self, id: &str, patch: EventPatch) -> Result<bool>;
}

/// Result of an import upsert.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpsertAction {
    Added,
    Updated,
    Unchanged,
}

/// Clock times of the synthetic pair a marked holiday records.
const HOLIDAY_CHECK_IN: (u32, u32) = (8, 0);
const HOLIDAY_CHECK_OUT: (u32, u32) = (15, 0);

/// Day-level operations built on the narrow [`EventStore`] interface.
pub trait EventStoreExt: EventStore {
    /// Inserts or updates the single event of `kind` on `date`.
    ///
    /// An existing event with a different clock time is retimed and its
    /// `synced` flag reset so the next push carries the change. A matching
    /// time is a no-op.
    fn upsert_by_date_kind(&self, date: NaiveDate, kind: EventKind, time: NaiveTime) -> Result<UpsertAction> {
        let mut events = self.read_all()?;
        if let Some(existing) = events.iter_mut().find(|event| event.date == date && event.kind == kind) {
            if existing.time == time {
                return Ok(UpsertAction::Unchanged);
            }
            existing.time = time;
            existing.timestamp_ms = local_timestamp_ms(date, time);
            existing.synced = false;
            self.write_all(events)?;
            return Ok(UpsertAction::Updated);
        }
        let mut event = WorkEvent::new(kind, date, time);
        event.id = next_event_id("import");
        events.insert(0, event);
        self.write_all(events)?;
        Ok(UpsertAction::Added)
    }

    /// Replaces the date's events with the fixed holiday pair.
    fn mark_holiday(&self, date: NaiveDate) -> Result<()> {
        let mut events: Vec<WorkEvent> = self.read_all()?.into_iter().filter(|event| event.date != date).collect();
        let check_in = NaiveTime::from_hms_opt(HOLIDAY_CHECK_IN.0, HOLIDAY_CHECK_IN.1, 0).unwrap();
        let check_out = NaiveTime::from_hms_opt(HOLIDAY_CHECK_OUT.0, HOLIDAY_CHECK_OUT.1, 0).unwrap();
        events.insert(0, WorkEvent::holiday(EventKind::CheckOut, date, check_out));
        events.insert(0, WorkEvent::holiday(EventKind::CheckIn, date, check_in));
        self.write_all(events)
    }

    /// Removes the date's holiday-flagged events. Nothing is restored.
    fn unmark_holiday(&self, date: NaiveDate) -> Result<()> {
        let mut events = self.read_all()?;
        events.retain(|event| !(event.date == date && event.is_holiday));
        self.write_all(events)
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.read_all()?.iter().any(|event| event.date == date && event.is_holiday))
    }

    /// Erases every event in the account.
    fn clear_all(&self) -> Result<()> {
        self.write_all(Vec::new())
    }
}

impl<S: EventStore + ?Sized> EventStoreExt for S {}

/// In-memory event store, newest first like the persisted list.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<WorkEvent>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<WorkEvent>) -> Self {
        Self { events: RwLock::new(events) }
    }
}

impl EventStore for MemoryEventStore {
    fn read_all(&self) -> Result<Vec<WorkEvent>> {
        Ok(self.events.read().clone())
    }

    fn write_all(&self, events: Vec<WorkEvent>) -> Result<()> {
        *self.events.write() = events;
        Ok(())
    }

    fn append(&self, event: WorkEvent) -> Result<()> {
        self.events.write().insert(0, event);
        Ok(())
    }

    fn update_by_id(&self, id: &str, patch: EventPatch) -> Result<bool> {
        let mut events = self.events.write();
        let Some(event) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(false);
        };
        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(timestamp_ms) = patch.timestamp_ms {
            event.timestamp_ms = timestamp_ms;
        }
        if let Some(synced) = patch.synced {
            event.synced = synced;
        }
        if let Some(is_holiday) = patch.is_holiday {
            event.is_holiday = is_holiday;
        }
        Ok(true)
    }
}

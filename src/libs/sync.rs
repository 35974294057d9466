//! Reconciliation between the local event store and the remote account.

use crate::api::remote::{RemoteDayRecord, RemoteStore};
use crate::libs::event::{EventKind, WorkEvent};
use crate::store::breaks::BreakTable;
use crate::store::events::{EventPatch, EventStore};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

/// Outcome of a push pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    NotLoggedIn,
    Done { succeeded: usize, failed: usize },
}

/// Outcome of a pull pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PullOutcome {
    NotLoggedIn,
    Done { added: usize },
}

/// Drives push/pull between an [`EventStore`] and a [`RemoteStore`].
pub struct Reconciler<'a, S: EventStore, R: RemoteStore> {
    store: &'a S,
    remote: &'a R,
}

impl<'a, S: EventStore, R: RemoteStore> Reconciler<'a, S, R> {
    pub fn new(store: &'a S, remote: &'a R) -> Self {
        Self { store, remote }
    }

    /// Pushes every unsynced event into its remote day record.
    ///
    /// Events are pushed one at a time; each push reads the date's current
    /// record, merges the event in and writes the record back. A successful
    /// push flips the local `synced` flag. Failures are logged and counted,
    /// never retried, and never abort the pass.
    pub async fn push_pending(&self) -> Result<PushOutcome> {
        let Some(user) = self.remote.user_id() else {
            return Ok(PushOutcome::NotLoggedIn);
        };

        let pending: Vec<_> = self.store.read_all()?.into_iter().filter(|event| !event.synced).collect();
        let mut succeeded = 0;
        let mut failed = 0;
        for event in pending {
            match self.push_event(&user, &event).await {
                Ok(()) => {
                    self.store.update_by_id(
                        &event.id,
                        EventPatch {
                            synced: Some(true),
                            ..Default::default()
                        },
                    )?;
                    succeeded += 1;
                }
                Err(err) => {
                    warn!(event_id = %event.id, error = %err, "failed to push event");
                    failed += 1;
                }
            }
        }
        Ok(PushOutcome::Done { succeeded, failed })
    }

    async fn push_event(&self, user: &str, event: &WorkEvent) -> Result<()> {
        let mut record = self
            .remote
            .fetch_day(user, event.date)
            .await?
            .unwrap_or_else(|| RemoteDayRecord::new(event.date));
        record.merge_event(event);
        self.remote.store_day(user, &record).await
    }

    /// Pulls all remote day records into the local store.
    ///
    /// Remote data never overwrites local data: a synthesized event is only
    /// added when no local event of the same (date, kind) exists, so a
    /// remote edit stays invisible once the date has any local record of
    /// that kind. The `break_counted` flag is restored to the side-table.
    pub async fn pull_remote(&self, breaks: &impl BreakTable) -> Result<PullOutcome> {
        let Some(user) = self.remote.user_id() else {
            return Ok(PullOutcome::NotLoggedIn);
        };

        let records = self.remote.fetch_all(&user).await?;
        let mut events = self.store.read_all()?;
        let present: HashSet<(NaiveDate, EventKind)> = events.iter().map(|event| (event.date, event.kind)).collect();

        let mut added = 0;
        for record in records {
            if let Some(counted) = record.break_counted {
                breaks.set_break_counted(record.date, counted);
            }
            for event in record.events() {
                if present.contains(&(event.date, event.kind)) {
                    continue;
                }
                events.push(event);
                added += 1;
            }
        }

        if added > 0 {
            events.sort_by_key(|event| std::cmp::Reverse(event.timestamp_ms));
            self.store.write_all(events)?;
        }
        Ok(PullOutcome::Done { added })
    }
}

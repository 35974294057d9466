//! # Stempel - Work-Hours Accounting Engine
//!
//! A library for turning a raw sequence of timestamped work events
//! (check-in, check-out, break start/end, holiday markers) into aggregated
//! working-time figures, and for moving that data in and out of the store.
//!
//! ## Features
//!
//! - **Daily Summaries**: Reduce the event list to one record per calendar date
//! - **Duration Calculation**: Gross/net minutes and overtime against a daily target
//! - **Weekly Buckets**: Monday-anchored weeks over a configurable working-day set
//! - **Monthly Balances**: Worked vs. target minutes and evening-hours accrual
//! - **CSV Import/Export**: Spreadsheet-compatible codec with tolerant parsing
//! - **Cloud Reconciliation**: Push unsynced events and pull per-date remote records
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stempel::libs::standards::Standards;
//! use stempel::libs::summary::aggregate_daily;
//! use stempel::libs::week::build_weeks;
//! use stempel::store::breaks::MemoryBreakTable;
//! use stempel::store::events::{EventStore, MemoryEventStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = MemoryEventStore::new();
//! let breaks = MemoryBreakTable::new();
//! let standards = Standards::default();
//!
//! let days = aggregate_daily(&store.read_all()?, &breaks);
//! let weeks = build_weeks(&days, &standards, chrono::Local::now().date_naive());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod libs;
pub mod store;

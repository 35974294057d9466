//! Storage interfaces consumed by the accounting engine.
//!
//! The engine never talks to a concrete persistence mechanism; it goes
//! through the traits in these modules. In-memory reference implementations
//! back the single-user default and the test suite.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use stempel::store::events::{EventStoreExt, MemoryEventStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = MemoryEventStore::new();
//! let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
//! store.mark_holiday(date)?;
//! assert!(store.is_holiday(date)?);
//! # Ok(())
//! # }
//! ```

pub mod breaks;
pub mod events;
pub mod standards;

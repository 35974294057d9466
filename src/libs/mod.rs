//! The accounting engine proper.
//!
//! Events come in through `event`, are reduced to per-date summaries by
//! `summary`, measured by `duration` against the `standards` parameters,
//! bucketed by `week` and `month`, and cross the process boundary through
//! `export` (CSV) and `sync` (remote reconciliation).

pub mod duration;
pub mod event;
pub mod export;
pub mod formatter;
pub mod month;
pub mod standards;
pub mod summary;
pub mod sync;
pub mod week;

//! Remote account boundary.
//!
//! `remote` defines the per-date day-record document and the `RemoteStore`
//! trait the sync reconciler drives; `rest` is the HTTP implementation.

pub mod remote;
pub mod rest;

pub use remote::{RemoteDayRecord, RemoteStore};
pub use rest::{RestConfig, RestRemote};

// src/jobs/mod.rs
//! The two batch jobs. Each one runs to completion and returns the first error.

pub mod recommendation_sync;
pub mod signal_refresh;

pub use recommendation_sync::SyncReport;
pub use signal_refresh::RefreshOutcome;

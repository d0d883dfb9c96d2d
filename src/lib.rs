//! Batch jobs for the recommendations API: a per-user signal sync and a
//! refresh-cycle trigger.

pub mod cli;
pub mod core;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{JobError, Result};

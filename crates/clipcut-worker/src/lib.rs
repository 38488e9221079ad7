//! Batch runner for transcript-driven clip refinement.
//!
//! The worker loads a word-timestamped transcript and a segment list,
//! refines every item synchronously (refinement is pure and fast), then
//! encodes the surviving cut-lists concurrently with a bounded number
//! of FFmpeg processes. One item failing never aborts the batch; the
//! run always ends with a manifest and a summary.

pub mod config;
pub mod error;
pub mod inputs;
pub mod runner;

pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use runner::{BatchOutcome, BatchRunner, ItemReport};

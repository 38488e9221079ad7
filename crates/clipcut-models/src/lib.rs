//! Shared data models for the ClipCut refinement pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Word-timestamped transcripts
//! - Coarse segments and compilations (the analysis-step output)
//! - Keep-ranges and cut-list items
//! - Batch item states, rejection reasons and the final summary
//! - The persisted output manifest

pub mod cutlist;
pub mod manifest;
pub mod range;
pub mod segment;
pub mod slug;
pub mod summary;
pub mod transcript;

// Re-export common types
pub use cutlist::{CutListItem, ItemState, RejectReason};
pub use manifest::{ManifestEntry, ManifestSource, OutputManifest};
pub use range::KeepRange;
pub use segment::{Compilation, Segment, SegmentList};
pub use slug::slugify_title;
pub use summary::{BatchId, BatchSummary};
pub use transcript::{Sentence, TranscriptDoc, Word};

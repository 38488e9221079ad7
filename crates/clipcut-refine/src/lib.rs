//! Clip refinement core.
//!
//! Turns a word-timestamped transcript plus coarse segment boundaries
//! into exact keep-ranges, free of filler words and long silences.
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │ Timeline   │──►│ Filler     │──►│ Boundary / │──►│ Duration   │
//! │ Loader     │   │ Classifier │   │ Silence    │   │ Policy     │
//! └────────────┘   └────────────┘   └────────────┘   └────────────┘
//!                                                          │
//!                                       ┌────────────┐     ▼
//!                                       │ Cut-List   │◄────┘
//!                                       │ Assembler  │
//!                                       └────────────┘
//! ```
//!
//! Everything here is pure and synchronous; the only side effects live
//! behind the Encoder boundary in `clipcut-media`.

mod assemble;
mod boundary;
mod config;
mod duration;
mod error;
mod filler;
mod silence;
mod timeline;

pub use assemble::{Assembler, SegmentOutcome};
pub use boundary::{resolve_span, ResolvedSpan};
pub use config::{RefinementConfig, RefinementPolicy};
pub use duration::{DurationLimits, DurationVerdict};
pub use error::{RefineError, RefineResult};
pub use filler::{FillerLexicon, FillerPolicy};
pub use silence::{detect_gaps, split_keep_ranges, SilenceSplit};
pub use timeline::Timeline;

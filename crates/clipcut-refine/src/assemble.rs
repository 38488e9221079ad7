//! Cut-list assembly.
//!
//! Drives boundary resolution, filler removal, silence splitting and the
//! duration policy for one segment or one compilation, producing either
//! a rejection or a [`CutListItem`] ready for the encoder.

use tracing::{debug, info, warn};

use clipcut_models::{
    range::total_duration, slugify_title, Compilation, CutListItem, KeepRange, RejectReason,
    Segment,
};

use crate::boundary::resolve_span;
use crate::config::RefinementConfig;
use crate::duration::DurationVerdict;
use crate::error::{RefineError, RefineResult};
use crate::filler::FillerLexicon;
use crate::silence::split_keep_ranges;
use crate::timeline::Timeline;

/// Result of refining one batch item.
#[derive(Debug)]
pub enum SegmentOutcome {
    /// The item survived refinement and is ready to encode.
    Assembled(CutListItem),
    /// The item is skipped; counted in batch statistics.
    Rejected(RejectReason),
}

/// Refines segments and compilations against one shared timeline.
pub struct Assembler<'t> {
    timeline: &'t Timeline,
    config: RefinementConfig,
    lexicon: FillerLexicon,
}

impl<'t> Assembler<'t> {
    pub fn new(timeline: &'t Timeline, config: RefinementConfig) -> Self {
        let lexicon = FillerLexicon::new(config.filler_policy);
        Self {
            timeline,
            config,
            lexicon,
        }
    }

    /// Replace the default filler dictionary, e.g. for localization.
    pub fn with_lexicon(mut self, lexicon: FillerLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn config(&self) -> &RefinementConfig {
        &self.config
    }

    fn active_lexicon(&self) -> Option<&FillerLexicon> {
        self.config.removes_fillers().then_some(&self.lexicon)
    }

    /// Refine one segment. `position` is the 1-based batch position used
    /// for output naming.
    pub fn refine_segment(&self, position: usize, segment: &Segment) -> SegmentOutcome {
        let span = match resolve_span(
            self.timeline,
            segment.start_index,
            segment.end_index,
            self.active_lexicon(),
            self.config.safety_buffer,
        ) {
            Ok(span) => span,
            Err(_) => {
                debug!(
                    position,
                    start_index = segment.start_index,
                    end_index = segment.end_index,
                    "No speech left for segment"
                );
                return SegmentOutcome::Rejected(RejectReason::NoSpeech);
            }
        };

        let (ranges, silences_removed) = if self.config.removes_silences() {
            let split = split_keep_ranges(
                &span.words,
                self.config.silence_threshold,
                self.config.min_subclip_secs,
                self.config.safety_buffer,
            );
            if split.dropped_short > 0 {
                debug!(
                    position,
                    dropped = split.dropped_short,
                    "Dropped sub-ranges below minimum length"
                );
            }
            (split.ranges, split.silences_removed)
        } else {
            // The resolved span is already buffered
            (vec![KeepRange::new(span.start, span.end)], 0)
        };

        let duration_secs = total_duration(&ranges);

        match self.config.limits.classify(duration_secs) {
            DurationVerdict::TooShort => {
                info!(
                    position,
                    duration_secs,
                    min_secs = self.config.limits.min_secs,
                    "Segment rejected: too short"
                );
                SegmentOutcome::Rejected(RejectReason::TooShort)
            }
            DurationVerdict::TooLong => {
                info!(
                    position,
                    duration_secs,
                    max_secs = self.config.limits.max_secs,
                    "Segment rejected: too long"
                );
                SegmentOutcome::Rejected(RejectReason::TooLong)
            }
            DurationVerdict::Accepted => {
                let output_name = format!(
                    "{:03}_{}.mp4",
                    position,
                    slugify_title(&segment.suggested_title)
                );
                info!(
                    position,
                    output = %output_name,
                    ranges = ranges.len(),
                    duration_secs,
                    fillers_removed = span.fillers_removed,
                    silences_removed,
                    "Segment assembled"
                );
                SegmentOutcome::Assembled(CutListItem {
                    ranges,
                    output_name,
                    fillers_removed: span.fillers_removed,
                    silences_removed,
                    duration_secs,
                    time_saved_secs: (segment.duration - duration_secs).max(0.0),
                })
            }
        }
    }

    /// Refine a compilation by concatenating each member segment's
    /// resolved span, in order.
    ///
    /// Members get boundary resolution only; no silence pass runs inside
    /// a compilation, and no duration ceiling applies. A member with no
    /// surviving words is skipped; the compilation is rejected only when
    /// every member is empty.
    pub fn refine_compilation(
        &self,
        compilation: &Compilation,
        clips: &[Segment],
    ) -> RefineResult<SegmentOutcome> {
        let mut ranges = Vec::with_capacity(compilation.segment_indices.len());
        let mut fillers_removed = 0;
        let mut advisory_secs = 0.0;

        for &index in &compilation.segment_indices {
            let segment = clips.get(index).ok_or(RefineError::UnknownSegment {
                id: compilation.id,
                index,
            })?;

            match resolve_span(
                self.timeline,
                segment.start_index,
                segment.end_index,
                self.active_lexicon(),
                self.config.safety_buffer,
            ) {
                Ok(span) => {
                    fillers_removed += span.fillers_removed;
                    advisory_secs += segment.duration;
                    ranges.push(KeepRange::new(span.start, span.end));
                }
                Err(_) => {
                    warn!(
                        compilation = compilation.id,
                        member = index,
                        "Skipping compilation member with no speech"
                    );
                }
            }
        }

        if ranges.is_empty() {
            return Ok(SegmentOutcome::Rejected(RejectReason::NoSpeech));
        }

        let duration_secs = total_duration(&ranges);
        let output_name = format!(
            "comp_{:03}_{}.mp4",
            compilation.id,
            slugify_title(&compilation.title)
        );

        info!(
            compilation = compilation.id,
            output = %output_name,
            members = ranges.len(),
            duration_secs,
            "Compilation assembled"
        );

        Ok(SegmentOutcome::Assembled(CutListItem {
            ranges,
            output_name,
            fillers_removed,
            silences_removed: 0,
            duration_secs,
            time_saved_secs: (advisory_secs - duration_secs).max(0.0),
        }))
    }
}

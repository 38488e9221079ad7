//! Batch execution.
//!
//! Runs in two phases. Refinement is synchronous: it is pure arithmetic
//! over the shared timeline and needs no locking. Encoding is
//! concurrent: each assembled item becomes one task, bounded by a
//! semaphore so only a fixed number of FFmpeg processes run at once.
//! A failing item is recorded and the batch continues.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{watch, Semaphore};
use tracing::{debug, error, info, warn};

use clipcut_media::Encoder;
use clipcut_models::{
    BatchSummary, CutListItem, ItemState, ManifestEntry, ManifestSource, OutputManifest,
    RejectReason, SegmentList,
};
use clipcut_refine::{Assembler, SegmentOutcome, Timeline};

use crate::config::WorkerConfig;
use crate::error::WorkerResult;

/// Final record for one batch item.
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub source: ManifestSource,
    pub state: ItemState,
    pub reject_reason: Option<RejectReason>,
    /// Output file name, present once the item is assembled.
    pub output: Option<String>,
    /// Encode failure detail, present only in `EncodeFailed`.
    pub error: Option<String>,
}

impl ItemReport {
    /// A freshly dequeued item, not yet resolved.
    pub fn new(source: ManifestSource) -> Self {
        Self {
            source,
            state: ItemState::Pending,
            reject_reason: None,
            output: None,
            error: None,
        }
    }
}

/// Everything a finished run produces besides the output files.
#[derive(Debug)]
pub struct BatchOutcome {
    pub summary: BatchSummary,
    pub reports: Vec<ItemReport>,
    pub manifest: OutputManifest,
}

/// An assembled item waiting for the encode phase.
struct EncodeJob {
    report_idx: usize,
    item: CutListItem,
}

/// Drives one batch from loaded inputs to written outputs.
pub struct BatchRunner {
    encoder: Arc<dyn Encoder>,
    config: WorkerConfig,
    shutdown_rx: Option<watch::Receiver<bool>>,
}

impl BatchRunner {
    pub fn new(encoder: Arc<dyn Encoder>, config: WorkerConfig) -> Self {
        Self {
            encoder,
            config,
            shutdown_rx: None,
        }
    }

    /// Attach a shutdown signal; no new items are dispatched after it
    /// fires. In-flight encodes are cancelled by the encoder itself.
    pub fn with_shutdown(mut self, shutdown_rx: watch::Receiver<bool>) -> Self {
        self.shutdown_rx = Some(shutdown_rx);
        self
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown_rx
            .as_ref()
            .map(|rx| *rx.borrow())
            .unwrap_or(false)
    }

    /// Run the full batch: refine every item, encode the survivors,
    /// write the manifest.
    pub async fn run(
        &self,
        timeline: &Timeline,
        list: &SegmentList,
        video: &Path,
        output_dir: &Path,
    ) -> WorkerResult<BatchOutcome> {
        tokio::fs::create_dir_all(output_dir).await?;

        let mut summary = BatchSummary::new(list.item_count());
        let mut reports = Vec::with_capacity(list.item_count());
        let mut jobs = Vec::new();

        self.refine_all(timeline, list, &mut summary, &mut reports, &mut jobs)?;
        info!(
            assembled = jobs.len(),
            rejected = summary.rejected(),
            "Refinement complete"
        );

        let mut manifest = OutputManifest::default();
        self.encode_all(
            jobs,
            video,
            output_dir,
            &mut summary,
            &mut reports,
            &mut manifest,
        )
        .await;

        summary.finish();
        write_manifest(&manifest, output_dir).await?;

        Ok(BatchOutcome {
            summary,
            reports,
            manifest,
        })
    }

    fn refine_all(
        &self,
        timeline: &Timeline,
        list: &SegmentList,
        summary: &mut BatchSummary,
        reports: &mut Vec<ItemReport>,
        jobs: &mut Vec<EncodeJob>,
    ) -> WorkerResult<()> {
        let assembler = Assembler::new(timeline, self.config.refinement.clone());

        for (ordinal, segment) in list.clips.iter().enumerate() {
            let mut report = ItemReport::new(ManifestSource::Segment { ordinal });
            report.state = ItemState::Resolving;
            debug!(item = %report.source, "Resolving boundaries");
            let outcome = assembler.refine_segment(ordinal + 1, segment);
            record_outcome(&mut report, outcome, summary, jobs, reports.len());
            reports.push(report);
        }

        for compilation in &list.compilations {
            let mut report = ItemReport::new(ManifestSource::Compilation {
                id: compilation.id,
            });
            report.state = ItemState::Resolving;
            debug!(item = %report.source, "Resolving boundaries");
            let outcome = assembler.refine_compilation(compilation, &list.clips)?;
            record_outcome(&mut report, outcome, summary, jobs, reports.len());
            reports.push(report);
        }

        Ok(())
    }

    async fn encode_all(
        &self,
        jobs: Vec<EncodeJob>,
        video: &Path,
        output_dir: &Path,
        summary: &mut BatchSummary,
        reports: &mut [ItemReport],
        manifest: &mut OutputManifest,
    ) {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_encodes.max(1)));
        let mut handles = Vec::with_capacity(jobs.len());

        for job in jobs {
            if self.shutdown_requested() {
                warn!("Shutdown requested, not dispatching remaining items");
                break;
            }
            let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                break;
            };

            let encoder = Arc::clone(&self.encoder);
            let video = video.to_path_buf();
            let dest = output_dir.join(&job.item.output_name);
            let work_dir = self.config.work_dir.clone();
            let report_idx = job.report_idx;
            let item = job.item;

            handles.push((
                report_idx,
                tokio::spawn(async move {
                    let _permit = permit;
                    let result =
                        encode_item(encoder.as_ref(), &video, &item, &dest, work_dir.as_deref())
                            .await;
                    (item, result)
                }),
            ));
        }

        for (report_idx, handle) in handles {
            match handle.await {
                Ok((item, Ok(()))) => {
                    info!(output = %item.output_name, "Item encoded");
                    reports[report_idx].state = ItemState::Encoded;
                    summary.encoded += 1;
                    summary.fillers_removed += item.fillers_removed;
                    summary.silences_removed += item.silences_removed;
                    summary.ranges_kept += item.ranges.len();
                    summary.time_saved_secs += item.time_saved_secs;
                    manifest.entries.push(ManifestEntry {
                        source: reports[report_idx].source,
                        output: item.output_name,
                        duration_secs: item.duration_secs,
                        ranges: item.ranges,
                    });
                }
                Ok((item, Err(e))) => {
                    warn!(output = %item.output_name, "Encoding failed: {}", e);
                    reports[report_idx].state = ItemState::EncodeFailed;
                    reports[report_idx].error = Some(e.to_string());
                    summary.encode_failed += 1;
                }
                Err(e) => {
                    error!("Encode task panicked: {}", e);
                    reports[report_idx].state = ItemState::EncodeFailed;
                    reports[report_idx].error = Some(e.to_string());
                    summary.encode_failed += 1;
                }
            }
        }
    }
}

fn record_outcome(
    report: &mut ItemReport,
    outcome: SegmentOutcome,
    summary: &mut BatchSummary,
    jobs: &mut Vec<EncodeJob>,
    report_idx: usize,
) {
    match outcome {
        SegmentOutcome::Assembled(item) => {
            report.output = Some(item.output_name.clone());
            report.state = ItemState::Assembled;
            jobs.push(EncodeJob { report_idx, item });
        }
        SegmentOutcome::Rejected(reason) => {
            info!(item = %report.source, reason = %reason, "Item rejected");
            summary.record_rejection(reason);
            report.reject_reason = Some(reason);
            report.state = ItemState::Rejected;
        }
    }
}

/// Encode one item: extract each keep-range into a scratch unit, then
/// concatenate the units into the destination file. Scratch space is
/// removed when the guard drops, on failure included.
async fn encode_item(
    encoder: &dyn Encoder,
    video: &Path,
    item: &CutListItem,
    dest: &Path,
    work_dir: Option<&Path>,
) -> WorkerResult<()> {
    let scratch = match work_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir).await?;
            tempfile::tempdir_in(dir)?
        }
        None => tempfile::tempdir()?,
    };

    let mut units = Vec::with_capacity(item.ranges.len());
    for (i, range) in item.ranges.iter().enumerate() {
        let unit = scratch.path().join(format!("part_{:03}.mp4", i));
        encoder.extract(video, range, &unit).await?;
        units.push(unit);
    }

    encoder.concatenate(&units, dest).await?;
    Ok(())
}

async fn write_manifest(manifest: &OutputManifest, output_dir: &Path) -> WorkerResult<()> {
    let path = output_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    tokio::fs::write(&path, json).await?;
    info!(
        path = %path.display(),
        entries = manifest.entries.len(),
        "Manifest written"
    );
    Ok(())
}

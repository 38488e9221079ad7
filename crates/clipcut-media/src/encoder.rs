//! The Encoder capability and its FFmpeg implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info};

use clipcut_models::KeepRange;

use crate::command::{check_ffmpeg, stderr_tail, FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// External media operations required by the refinement pipeline.
///
/// Implementations own the actual video bytes; the core only supplies
/// time ranges and file paths.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Cut one time range of `source` into an independently playable
    /// unit at `dest`.
    async fn extract(&self, source: &Path, range: &KeepRange, dest: &Path) -> MediaResult<()>;

    /// Losslessly join `units` in order into one file at `dest`.
    async fn concatenate(&self, units: &[PathBuf], dest: &Path) -> MediaResult<()>;
}

/// FFmpeg-backed [`Encoder`].
///
/// Extraction uses two-pass seeking (fast input seek to get close, then
/// accurate output seek) and re-encodes to guarantee frame-accurate
/// cuts; stream copy cannot cut between keyframes. Concatenation uses
/// the concat demuxer with stream copy so joining adds no generation
/// loss.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    runner: FfmpegRunner,
}

/// Seconds of fast input seek headroom before the accurate seek.
const FAST_SEEK_HEADROOM: f64 = 5.0;

impl FfmpegEncoder {
    /// Create an encoder, verifying FFmpeg is on the PATH.
    pub fn new() -> MediaResult<Self> {
        check_ffmpeg()?;
        Ok(Self {
            runner: FfmpegRunner::new(),
        })
    }

    /// Set a per-call timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.runner = self.runner.with_timeout(secs);
        self
    }

    /// Set a cancellation signal; in-flight calls are killed when it
    /// fires.
    pub fn with_cancel(mut self, cancel_rx: watch::Receiver<bool>) -> Self {
        self.runner = self.runner.with_cancel(cancel_rx);
        self
    }
}

/// Build the extraction command for one keep-range.
fn extraction_command(source: &Path, range: &KeepRange, dest: &Path) -> FfmpegCommand {
    let fast_seek = (range.start - FAST_SEEK_HEADROOM).max(0.0);
    let accurate_seek = range.start - fast_seek;

    FfmpegCommand::new(source, dest)
        .seek(fast_seek)
        .output_seek(accurate_seek)
        .duration(range.duration())
        .video_codec("libx264")
        .preset("veryfast")
        .crf(20)
        .audio_codec("aac")
        .audio_bitrate("128k")
        .output_arg("-avoid_negative_ts")
        .output_arg("make_zero")
}

/// Concat demuxer list file body.
fn concat_list_content(units: &[PathBuf]) -> String {
    units
        .iter()
        .map(|p| format!("file '{}'\n", p.display()))
        .collect()
}

#[async_trait]
impl Encoder for FfmpegEncoder {
    async fn extract(&self, source: &Path, range: &KeepRange, dest: &Path) -> MediaResult<()> {
        debug!(
            source = %source.display(),
            start = range.start,
            end = range.end,
            "Extracting keep-range"
        );

        let cmd = extraction_command(source, range, dest);
        let output = self.runner.run(&cmd).await?;

        if !output.status.success() {
            return Err(MediaError::encoding_failed(
                format!("range {:.3}-{:.3}", range.start, range.end),
                stderr_tail(&output.stderr),
                output.status.code(),
            ));
        }

        Ok(())
    }

    async fn concatenate(&self, units: &[PathBuf], dest: &Path) -> MediaResult<()> {
        match units {
            [] => return Err(MediaError::NoUnits),
            [single] => {
                // One unit: plain copy, no need to re-mux
                debug!(unit = %single.display(), "Single unit, copying to destination");
                tokio::fs::copy(single, dest).await?;
                return Ok(());
            }
            _ => {}
        }

        let mut list_file = tempfile::Builder::new()
            .prefix("concat_")
            .suffix(".txt")
            .tempfile()?;
        list_file.write_all(concat_list_content(units).as_bytes())?;
        list_file.flush()?;

        let cmd = FfmpegCommand::new(list_file.path(), dest)
            .input_arg("-f")
            .input_arg("concat")
            .input_arg("-safe")
            .input_arg("0")
            .codec_copy()
            .output_arg("-movflags")
            .output_arg("+faststart");

        let output = self.runner.run(&cmd).await?;

        if !output.status.success() {
            return Err(MediaError::concat_failed(
                format!("{} units", units.len()),
                stderr_tail(&output.stderr),
                output.status.code(),
            ));
        }

        info!(units = units.len(), dest = %dest.display(), "Concatenation complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_uses_two_pass_seek() {
        let range = KeepRange::new(42.0, 50.0);
        let args = extraction_command(Path::new("in.mp4"), &range, Path::new("out.mp4"))
            .build_args();

        // Fast input seek lands 5s early; accurate output seek covers the rest
        let first_ss = args.iter().position(|a| a == "-ss").unwrap();
        assert_eq!(args[first_ss + 1], "37.000");
        let second_ss = args.iter().rposition(|a| a == "-ss").unwrap();
        assert_eq!(args[second_ss + 1], "5.000");

        let t = args.iter().position(|a| a == "-t").unwrap();
        assert_eq!(args[t + 1], "8.000");
    }

    #[test]
    fn test_extraction_near_media_start() {
        let range = KeepRange::new(2.0, 4.0);
        let args = extraction_command(Path::new("in.mp4"), &range, Path::new("out.mp4"))
            .build_args();

        let first_ss = args.iter().position(|a| a == "-ss").unwrap();
        assert_eq!(args[first_ss + 1], "0.000");
        let second_ss = args.iter().rposition(|a| a == "-ss").unwrap();
        assert_eq!(args[second_ss + 1], "2.000");
    }

    #[test]
    fn test_concat_list_content() {
        let units = vec![PathBuf::from("/tmp/part_000.mp4"), PathBuf::from("/tmp/part_001.mp4")];
        let content = concat_list_content(&units);
        assert_eq!(content, "file '/tmp/part_000.mp4'\nfile '/tmp/part_001.mp4'\n");
    }
}

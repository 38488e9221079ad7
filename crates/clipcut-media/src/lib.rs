//! Encoder boundary for the ClipCut pipeline.
//!
//! The refinement core never touches video bytes; it computes time
//! ranges and calls into the [`Encoder`] capability defined here. The
//! production implementation shells out to FFmpeg:
//!
//! - `extract`: cut one keep-range into an independently playable unit
//!   (two-pass seek, re-encode for frame-accurate cuts)
//! - `concatenate`: losslessly join units with the concat demuxer
//!   (stream copy); a single-unit list shortcuts to a plain copy

mod command;
mod encoder;
mod error;

pub use command::{check_ffmpeg, FfmpegCommand, FfmpegRunner};
pub use encoder::{Encoder, FfmpegEncoder};
pub use error::{MediaError, MediaResult};

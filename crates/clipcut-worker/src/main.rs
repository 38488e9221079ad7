//! Clip refinement batch binary.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clipcut_media::FfmpegEncoder;
use clipcut_worker::{inputs, BatchRunner, WorkerConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::from_default_env().add_directive("clipcut=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let mut args = std::env::args().skip(1);
    let (Some(transcript), Some(segments), Some(video)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("Usage: clipcut-worker <transcript.json> <segments.json> <video> [output_dir]");
        std::process::exit(2);
    };
    let output_dir = args.next().unwrap_or_else(|| "clips".to_string());

    info!("Starting clipcut-worker");
    let config = WorkerConfig::from_env();
    info!("Worker config: {:?}", config);

    let timeline = match inputs::load_timeline(Path::new(&transcript)) {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load transcript: {}", e);
            std::process::exit(1);
        }
    };
    let list = match inputs::load_segment_list(Path::new(&segments)) {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to load segment list: {}", e);
            std::process::exit(1);
        }
    };

    // Setup signal handler; the watch channel fans out to the runner
    // and to in-flight FFmpeg processes
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        shutdown_tx.send(true).ok();
    });

    let encoder = match FfmpegEncoder::new() {
        Ok(e) => e
            .with_timeout(config.encode_timeout_secs)
            .with_cancel(shutdown_rx.clone()),
        Err(e) => {
            error!("Failed to create encoder: {}", e);
            std::process::exit(1);
        }
    };

    let runner = BatchRunner::new(Arc::new(encoder), config).with_shutdown(shutdown_rx);

    match runner
        .run(&timeline, &list, Path::new(&video), Path::new(&output_dir))
        .await
    {
        Ok(outcome) => {
            println!("{}", outcome.summary);
        }
        Err(e) => {
            error!("Batch failed: {}", e);
            std::process::exit(1);
        }
    }
}

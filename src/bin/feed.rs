//! `ptop-feed` is the producer half of pipetop: it samples the host once
//! per interval and writes one `<cpu> <mem> <load> <proc>` line to the pipe
//! that `ptop` reads.
//!
//! The write-side open is non-blocking, so samples produced while no reader
//! has the pipe open are dropped rather than queued.

#![warn(rust_2018_idioms)]

use std::{io::Write, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use pipetop::{
    collection::pipe::PipeSource,
    constants::{DEFAULT_PIPE_PATH, DEFAULT_UPDATE_RATE_IN_MILLISECONDS},
    options::parse_rate,
};
use sysinfo::{ProcessesToUpdate, System};

/// The arguments for ptop-feed.
#[derive(Parser, Clone, Debug)]
#[command(name = "ptop-feed", version, about = "Samples the host and feeds the pipetop pipe.")]
struct FeedArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        help = "The named pipe to write samples to."
    )]
    pipe: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "How often a sample is written. Takes milliseconds or a human duration."
    )]
    rate: Option<String>,
}

fn main() -> Result<()> {
    let args = FeedArgs::parse();

    let rate = match args.rate.as_deref() {
        Some(rate) => parse_rate(rate).context("Could not parse the sampling rate.")?,
        None => DEFAULT_UPDATE_RATE_IN_MILLISECONDS,
    };
    let source = PipeSource::new(args.pipe.as_deref().unwrap_or(DEFAULT_PIPE_PATH));
    source
        .create_if_missing()
        .context("Could not create the sample pipe.")?;

    let mut sys = System::new();

    // The first CPU refresh only establishes a baseline.
    sys.refresh_cpu_usage();

    loop {
        thread::sleep(Duration::from_millis(rate));

        sys.refresh_cpu_usage();
        sys.refresh_memory();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let cpu = sys.global_cpu_usage() as f64;
        let mem = if sys.total_memory() > 0 {
            sys.used_memory() as f64 / sys.total_memory() as f64 * 100.0
        } else {
            0.0
        };
        let load = System::load_average().one;
        let procs = sys.processes().len();

        let line = format!("{cpu:.2} {mem:.2} {load:.2} {procs}\n");
        if let Ok(mut pipe) = source.open_writer() {
            // A reader is attached; a failed write just drops this sample.
            let _ = pipe.write_all(line.as_bytes());
        }
    }
}

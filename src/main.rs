//! `copy-engine` — a small CLI front-end for the blocking copy dialect.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use copy_engine::cli::Args;
use copy_engine::{copy_sync, CopyOptions};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let opts: CopyOptions = args.options.into();
    copy_sync(&args.source, &args.destination, &opts).with_context(|| {
        format!(
            "failed to copy {} to {}",
            args.source.display(),
            args.destination.display()
        )
    })
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

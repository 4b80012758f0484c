//! Command-line interface for dirdump.
//!
//! Walks the given root directories and writes every file's path and content
//! into a single text report.

use clap::Parser;
use dirdump::{DumpBuilder, DumpOptions, dump};
use std::path::PathBuf;
use std::process::exit;

/// dirdump — concatenate directory trees into one text report
#[derive(Parser)]
#[command(name = "dirdump", version, about, long_about = None)]
struct Cli {
    /// Root directories to scan, in order (default: current dir).
    /// The report file is never listed, even when it lies under a root.
    roots: Vec<PathBuf>,

    /// Report file, overwritten on every run
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file providing roots, output and traversal switches
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Descend into symlinked directories
    #[arg(long, overrides_with = "no_follow_links")]
    follow_links: bool,

    /// Do not descend into symlinked directories, even if the config asks to
    #[arg(long, overrides_with = "follow_links")]
    no_follow_links: bool,

    /// Sort entries by name instead of filesystem order
    #[arg(long, overrides_with = "no_sort")]
    sort: bool,

    /// Keep filesystem order, even if the config asks to sort
    #[arg(long, overrides_with = "sort")]
    no_sort: bool,
}

/// Resolves a `--flag` / `--no-flag` pair on top of the configured value.
fn flag(configured: bool, on: bool, off: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}

impl Cli {
    fn into_options(self) -> Result<DumpOptions, dirdump::DumpError> {
        let base = match &self.config {
            Some(path) => DumpOptions::from_json_file(path)?,
            None => DumpOptions::default(),
        };
        let follow_links = flag(base.follow_links, self.follow_links, self.no_follow_links);
        let sort_entries = flag(base.sort_entries, self.sort, self.no_sort);
        let mut builder = DumpBuilder::from_options(base)
            .follow_links(follow_links)
            .sort_entries(sort_entries);
        if !self.roots.is_empty() {
            builder = builder.roots(self.roots);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let options = match Cli::parse().into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = dump(&options) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    println!("Files content has been saved to {}", options.output.display());
}

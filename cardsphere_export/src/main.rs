//! Cardsphere Export - ManaBox to Cardsphere converter
//!
//! Writes cardsphere.csv and error.log into the working directory, reading
//! names.csv and editions.csv from it as well unless told otherwise.

use std::path::PathBuf;
use std::time::Duration;

use cardsphere_export::{run, ExportConfig, DEFAULT_BRIDGE_URL};
use clap::{CommandFactory, Parser};

/// Convert a ManaBox collection export into a Cardsphere import file
#[derive(Parser, Debug)]
#[command(name = "cardsphere_export")]
#[command(version, about, long_about = None)]
struct Args {
    /// ManaBox CSV export to convert
    input: Option<PathBuf>,

    /// Cardsphere import file to write
    #[arg(short, long, default_value = "cardsphere.csv")]
    output: PathBuf,

    /// File collecting rows that need manual attention
    #[arg(long, default_value = "error.log")]
    error_log: PathBuf,

    /// Per-card name/edition overrides (set code, collector number, name, edition)
    #[arg(long, default_value = "names.csv")]
    names: PathBuf,

    /// Edition overrides by collector number range (set code, min, max, edition)
    #[arg(long, default_value = "editions.csv")]
    editions: PathBuf,

    /// Multiverse Bridge lookup endpoint; the Scryfall ID is appended
    #[arg(long, default_value = DEFAULT_BRIDGE_URL)]
    lookup_url: String,

    /// Pause after this many lookups (0 disables pausing)
    #[arg(long, default_value_t = 100)]
    throttle_every: u32,

    /// Length of each pause in seconds
    #[arg(long, default_value_t = 60)]
    throttle_pause_secs: u64,

    /// HTTP timeout for lookups in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Args {
    fn into_config(self, input: PathBuf) -> ExportConfig {
        ExportConfig {
            output: self.output,
            error_log: self.error_log,
            names: self.names,
            editions: self.editions,
            bridge_url: self.lookup_url,
            lookups_per_pause: self.throttle_every,
            pause: Duration::from_secs(self.throttle_pause_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..ExportConfig::new(input)
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug shows every lookup URL
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = Args::parse();
    let Some(input) = args.input.take() else {
        // Usage goes to stdout; nothing is written without an input file
        let _ = Args::command().print_help();
        std::process::exit(2);
    };

    let config = args.into_config(input);
    log::info!("Starting cardsphere_export...");

    match run(&config) {
        Ok(summary) => {
            log::info!(
                "Done: {} of {} rows written ({} pauses for throttling)",
                summary.written,
                summary.rows,
                summary.pauses
            );
        }
        Err(e) => {
            log::error!("Export failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

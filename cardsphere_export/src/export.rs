//! Run orchestration: open files, stream rows through the normalizer, summarize.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::bridge::{CardResolver, MultiverseBridge, DEFAULT_BRIDGE_URL};
use crate::error::{ExportError, Result, RowError};
use crate::models::ManaboxRow;
use crate::normalizer::{Normalized, Normalizer};
use crate::output::{CardsphereWriter, ErrorLog};
use crate::overrides::Overrides;
use crate::throttle::{LookupThrottle, DEFAULT_LOOKUPS_PER_PAUSE, DEFAULT_PAUSE};

/// Where a run reads from and writes to
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub error_log: PathBuf,
    pub names: PathBuf,
    pub editions: PathBuf,
    pub bridge_url: String,
    pub lookups_per_pause: u32,
    pub pause: Duration,
    /// `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
}

impl ExportConfig {
    /// Defaults matching the files a ManaBox export directory is expected to hold
    pub fn new(input: impl Into<PathBuf>) -> Self {
        ExportConfig {
            input: input.into(),
            output: PathBuf::from("cardsphere.csv"),
            error_log: PathBuf::from("error.log"),
            names: PathBuf::from("names.csv"),
            editions: PathBuf::from("editions.csv"),
            bridge_url: DEFAULT_BRIDGE_URL.to_string(),
            lookups_per_pause: DEFAULT_LOOKUPS_PER_PAUSE,
            pause: DEFAULT_PAUSE,
            timeout: None,
        }
    }
}

/// Row counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows: usize,
    pub written: usize,
    pub skipped: usize,
    pub filtered: usize,
    pub lookups: u32,
    pub pauses: u32,
}

/// Convert `config.input` into `config.output`, logging problem rows to `config.error_log`
pub fn run(config: &ExportConfig) -> Result<ExportSummary> {
    let overrides = Overrides::load(&config.names, &config.editions)?;
    let input = File::open(&config.input).map_err(|e| ExportError::io(&config.input, e))?;
    let bridge = MultiverseBridge::new(config.bridge_url.as_str(), config.timeout)?;
    let throttle = LookupThrottle::new(config.lookups_per_pause, config.pause);
    let mut normalizer = Normalizer::new(overrides, bridge, throttle);

    let output = File::create(&config.output).map_err(|e| ExportError::io(&config.output, e))?;
    let error_log =
        File::create(&config.error_log).map_err(|e| ExportError::io(&config.error_log, e))?;
    let mut writer = CardsphereWriter::new(BufWriter::new(output))?;
    let mut errors = ErrorLog::new(BufWriter::new(error_log));

    log::info!("Converting {}", config.input.display());
    let summary = convert(input, &mut normalizer, &mut writer, &mut errors)
        .map_err(|e| match e {
            ExportError::CsvWrite(source) => ExportError::csv(&config.output, source),
            other => other,
        })?;

    writer.flush()?;
    errors.flush()?;
    log::info!(
        "Wrote {} cards to {} ({} skipped, {} tokens filtered, {} lookups)",
        summary.written,
        config.output.display(),
        summary.skipped,
        summary.filtered,
        summary.lookups
    );
    Ok(summary)
}

/// Stream a ManaBox export through the normalizer. The header row is discarded
/// and data rows are numbered from 1.
pub fn convert<I, R, W, E>(
    input: I,
    normalizer: &mut Normalizer<R>,
    writer: &mut CardsphereWriter<W>,
    errors: &mut ErrorLog<E>,
) -> Result<ExportSummary>
where
    I: Read,
    R: CardResolver,
    W: Write,
    E: Write,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut summary = ExportSummary::default();
    for (idx, result) in rdr.records().enumerate() {
        let row_number = idx + 1;
        summary.rows += 1;

        let row = match result
            .map_err(|e| RowError::Unreadable(e.to_string()))
            .and_then(|record| ManaboxRow::from_record(&record))
        {
            Ok(row) => row,
            Err(e) => {
                errors.record(row_number, &e, "")?;
                summary.skipped += 1;
                continue;
            }
        };

        match normalizer.normalize(row_number, &row, errors)? {
            Normalized::Card(card) => {
                writer.write(&card)?;
                summary.written += 1;
            }
            Normalized::Token => summary.filtered += 1,
            Normalized::Skipped(_) => summary.skipped += 1,
        }
    }

    summary.lookups = normalizer.throttle().lookups();
    summary.pauses = normalizer.throttle().pauses();
    Ok(summary)
}

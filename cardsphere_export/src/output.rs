//! Writers for the two files a run produces: the Cardsphere import CSV and error.log.

use std::io::Write;

use crate::error::{Result, RowError};
use crate::models::CardsphereRow;

pub const CARDSPHERE_HEADER: [&str; 8] = [
    "Count",
    "Tradelist Count",
    "Name",
    "Edition",
    "Condition",
    "Language",
    "Foil",
    "Tags",
];

/// Cardsphere import CSV writer.
///
/// Cardsphere expects text columns quoted and numeric/foil columns bare, which
/// no single csv quote style produces, so quoting is done per field and the
/// csv writer is told never to add its own.
pub struct CardsphereWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> CardsphereWriter<W> {
    /// Create the writer and emit the header line
    pub fn new(out: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        inner.write_record(CARDSPHERE_HEADER)?;
        Ok(CardsphereWriter { inner })
    }

    pub fn write(&mut self, row: &CardsphereRow) -> Result<()> {
        self.inner.write_record([
            row.count.to_string(),
            row.tradelist_count.to_string(),
            quoted(&row.name),
            quoted(&row.edition),
            quoted(row.condition),
            quoted(row.language.as_str()),
            row.finish.as_str().to_string(),
            quoted(&row.tags),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| crate::error::ExportError::Write(e.into_error()))
    }
}

/// Wrap in double quotes; embedded quotes are dropped rather than escaped
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', ""))
}

/// Plain-text log of rows that need manual attention
pub struct ErrorLog<W: Write> {
    out: W,
    entries: usize,
}

impl<W: Write> ErrorLog<W> {
    pub fn new(out: W) -> Self {
        ErrorLog { out, entries: 0 }
    }

    /// Append `Line #<row>: <reason> - <detail>` and mirror it to the logger
    pub fn record(&mut self, row: usize, error: &RowError, detail: &str) -> Result<()> {
        let line = if detail.is_empty() {
            format!("Line #{row}: {error}")
        } else {
            format!("Line #{row}: {error} - {detail}")
        };
        log::warn!("{}", line);
        writeln!(self.out, "{}", line)?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Override tables for cards ManaBox and Cardsphere disagree on.
//!
//! `names.csv` pins name and edition for a set code + collector number.
//! `editions.csv` maps collector number ranges within a set code to an edition,
//! mostly for the Booster Fun treatments that share a set code with the base set.
//! Both files are header-less 4-column CSV and are loaded once per run.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExportError, Result};

/// `set code, collector number, name, edition`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameOverride {
    pub set_code: String,
    pub collector_number: String,
    pub name: String,
    pub edition: String,
}

/// `set code, first collector number, last collector number, edition`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditionRange {
    pub set_code: String,
    pub min: u32,
    pub max: u32,
    pub edition: String,
}

impl EditionRange {
    pub fn contains(&self, collector_number: u32) -> bool {
        (self.min..=self.max).contains(&collector_number)
    }
}

/// Both override tables, keyed by set code, entries kept in file order
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    names: HashMap<String, Vec<NameOverride>>,
    editions: HashMap<String, Vec<EditionRange>>,
}

impl Overrides {
    /// Load `names.csv` and `editions.csv` style files from disk
    pub fn load(names_path: &Path, editions_path: &Path) -> Result<Self> {
        let names_file = File::open(names_path).map_err(|e| ExportError::io(names_path, e))?;
        let editions_file =
            File::open(editions_path).map_err(|e| ExportError::io(editions_path, e))?;

        let overrides = Overrides {
            names: read_table(names_file, names_path, |o: &NameOverride| &o.set_code)?,
            editions: read_table(editions_file, editions_path, |r: &EditionRange| &r.set_code)?,
        };

        log::info!(
            "Loaded overrides: {} name entries, {} edition ranges",
            overrides.name_entry_count(),
            overrides.edition_range_count()
        );
        Ok(overrides)
    }

    /// Build the tables from in-memory CSV data
    pub fn from_readers<N: Read, E: Read>(names: N, editions: E) -> Result<Self> {
        Ok(Overrides {
            names: read_table(names, Path::new("names.csv"), |o: &NameOverride| &o.set_code)?,
            editions: read_table(editions, Path::new("editions.csv"), |r: &EditionRange| {
                &r.set_code
            })?,
        })
    }

    pub fn has_names_for(&self, set_code: &str) -> bool {
        self.names.contains_key(set_code)
    }

    pub fn has_editions_for(&self, set_code: &str) -> bool {
        self.editions.contains_key(set_code)
    }

    /// Explicit name and edition for an exact collector number; the last matching entry wins
    pub fn name_for(&self, set_code: &str, collector_number: &str) -> Option<&NameOverride> {
        self.names
            .get(set_code)?
            .iter()
            .rev()
            .find(|o| o.collector_number == collector_number)
    }

    /// Edition for a collector number inside one of the set's ranges; the last matching range wins
    pub fn edition_for(&self, set_code: &str, collector_number: u32) -> Option<&str> {
        self.editions
            .get(set_code)?
            .iter()
            .rev()
            .find(|r| r.contains(collector_number))
            .map(|r| r.edition.as_str())
    }

    pub fn name_entry_count(&self) -> usize {
        self.names.values().map(Vec::len).sum()
    }

    pub fn edition_range_count(&self) -> usize {
        self.editions.values().map(Vec::len).sum()
    }
}

fn read_table<R, T, K>(reader: R, path: &Path, key: K) -> Result<HashMap<String, Vec<T>>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
    K: Fn(&T) -> &String,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table: HashMap<String, Vec<T>> = HashMap::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        let entry = result.map_err(|e| ExportError::Overrides {
            path: path.to_path_buf(),
            reason: format!("line {}: {}", idx + 1, e),
        })?;
        table.entry(key(&entry).clone()).or_default().push(entry);
    }
    Ok(table)
}

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;

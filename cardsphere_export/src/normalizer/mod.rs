//! Row normalizer: turns one ManaBox row into one Cardsphere row.
//!
//! The stages run in a fixed order and later stages see the rewrites of
//! earlier ones, so the order below is part of the output format:
//!
//! 1. ASCII-fold the name
//! 2. edition synonyms and pattern rewrites
//! 3. Multiverse Bridge lookup for The List and lettered printings
//! 4. collector number suffixes (promos, star foils, alternates)
//! 5. numbered basics and reprints
//! 6. split names, quotes, fill-in-the-blanks
//! 7. names.csv, then editions.csv
//! 8. token filter

pub mod editions;
pub mod names;
pub mod suffix;

use std::io::Write;

use crate::bridge::CardResolver;
use crate::error::{Result, RowError};
use crate::models::{CardsphereRow, ManaboxRow};
use crate::output::ErrorLog;
use crate::overrides::Overrides;
use crate::throttle::LookupThrottle;

/// ManaBox's set code for The List
const LIST_SET_CODE: &str = "PLST";
const LIST_EDITION: &str = "The List";
const STICKER_SHEETS: &str = "Unfinity Sticker Sheets";

/// The fields the stages rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCard {
    pub name: String,
    pub edition: String,
    pub set_code: String,
    pub collector_number: String,
}

impl WorkingCard {
    pub fn numeric_collector_number(&self) -> std::result::Result<u32, RowError> {
        self.collector_number
            .parse()
            .map_err(|_| RowError::NonNumericCollectorNumber(self.collector_number.clone()))
    }

    /// The List reprints and lettered printings need Multiverse Bridge to find their Cardsphere identity
    pub fn needs_lookup(&self) -> bool {
        self.collector_number.contains('-')
            || self.set_code == LIST_SET_CODE
            || self.edition == LIST_EDITION
            || self
                .collector_number
                .chars()
                .last()
                .is_some_and(suffix::is_alternate_suffix)
    }

    pub fn is_token(&self) -> bool {
        self.name.contains("Token")
            || self.edition.contains("Tokens")
            || self.edition.contains(STICKER_SHEETS)
    }
}

/// What became of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Card(CardsphereRow),
    /// Tokens and sticker sheets are dropped without a log entry
    Token,
    /// Logged to the error log and left out of the output
    Skipped(RowError),
}

pub struct Normalizer<R: CardResolver> {
    overrides: Overrides,
    resolver: R,
    throttle: LookupThrottle,
}

impl<R: CardResolver> Normalizer<R> {
    pub fn new(overrides: Overrides, resolver: R, throttle: LookupThrottle) -> Self {
        Normalizer {
            overrides,
            resolver,
            throttle,
        }
    }

    pub fn throttle(&self) -> &LookupThrottle {
        &self.throttle
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Normalize one row. Row-level problems are written to `errors`;
    /// only I/O and network failures come back as `Err`.
    pub fn normalize<W: Write>(
        &mut self,
        row_number: usize,
        row: &ManaboxRow,
        errors: &mut ErrorLog<W>,
    ) -> Result<Normalized> {
        let mut card = WorkingCard {
            name: names::fold_to_ascii(&row.name),
            edition: row.set_name.clone(),
            set_code: row.set_code.clone(),
            collector_number: row.collector_number.clone(),
        };

        match self.run_stages(row_number, row, &mut card, errors)? {
            Ok(normalized) => Ok(normalized),
            Err(error) => {
                errors.record(row_number, &error, &detail(&card, row))?;
                Ok(Normalized::Skipped(error))
            }
        }
    }

    fn run_stages<W: Write>(
        &mut self,
        row_number: usize,
        row: &ManaboxRow,
        card: &mut WorkingCard,
        errors: &mut ErrorLog<W>,
    ) -> Result<std::result::Result<Normalized, RowError>> {
        let (language, count) = match (row.parsed_language(), row.parsed_quantity()) {
            (Ok(language), Ok(count)) => (language, count),
            (Err(e), _) | (_, Err(e)) => return Ok(Err(e)),
        };
        if card.collector_number.is_empty() {
            return Ok(Err(RowError::EmptyCollectorNumber));
        }

        card.edition = editions::rewrite_edition(&card.edition);

        if card.needs_lookup() {
            self.look_up(row_number, row, card, errors)?;
            if card.collector_number.is_empty() {
                return Ok(Err(RowError::EmptyCollectorNumber));
            }
        }

        if let Err(e) = self.finish_card(card) {
            return Ok(Err(e));
        }
        if card.is_token() {
            return Ok(Ok(Normalized::Token));
        }

        Ok(Ok(Normalized::Card(CardsphereRow::new(
            count,
            card.name.clone(),
            card.edition.clone(),
            language,
            row.finish(),
        ))))
    }

    /// Replace name, edition and number with the Multiverse Bridge match.
    /// A failed lookup is logged but the row carries on with its ManaBox values.
    fn look_up<W: Write>(
        &mut self,
        row_number: usize,
        row: &ManaboxRow,
        card: &mut WorkingCard,
        errors: &mut ErrorLog<W>,
    ) -> Result<()> {
        let matches = self.resolver.resolve(&row.scryfall_id)?;

        match matches.into_iter().next() {
            Some(found) => {
                // Scryfall drops the back half of split cards, Multiverse Bridge does not
                if !names::is_split_name(&card.name) {
                    card.name = found.name;
                }
                card.edition = found.edition;
                card.collector_number = found.collector_number;
                if card.collector_number.contains('-') {
                    card.set_code = card.set_code.chars().take(3).collect();
                }
            }
            None => errors.record(row_number, &RowError::LookupFailed, &detail(card, row))?,
        }

        self.throttle.record_lookup();
        Ok(())
    }

    fn finish_card(&self, card: &mut WorkingCard) -> std::result::Result<(), RowError> {
        suffix::resolve_suffix(card)?;

        names::number_basic_land(card)?;
        names::number_reprint(card);
        names::truncate_split_name(card);
        card.name = names::tidy_name(&card.name);

        if self.overrides.has_names_for(&card.set_code) {
            if let Some(pinned) = self
                .overrides
                .name_for(&card.set_code, &card.collector_number)
            {
                card.name = pinned.name.clone();
                card.edition = pinned.edition.clone();
            }
        }

        if self.overrides.has_editions_for(&card.set_code) {
            let number = card.numeric_collector_number()?;
            if let Some(edition) = self.overrides.edition_for(&card.set_code, number) {
                card.edition = edition.to_string();
            }
        }
        Ok(())
    }
}

/// `<name> - <edition> - <scryfall id>` for error log lines
fn detail(card: &WorkingCard, row: &ManaboxRow) -> String {
    format!("{} - {} - {}", card.name, card.edition, row.scryfall_id)
}

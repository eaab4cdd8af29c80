use csv::StringRecord;
use mtg_common::{Finish, Language};

use crate::error::RowError;

// ManaBox CSV export columns:
// Name,Set code,Set name,Collector number,Foil,Rarity,Quantity,ManaBox ID,
// Scryfall ID,Purchase price,Misprint,Altered,Condition,Language,Purchase price currency
const COL_NAME: usize = 0;
const COL_SET_CODE: usize = 1;
const COL_SET_NAME: usize = 2;
const COL_COLLECTOR_NUMBER: usize = 3;
const COL_FOIL: usize = 4;
const COL_QUANTITY: usize = 6;
const COL_SCRYFALL_ID: usize = 8;
const COL_CONDITION: usize = 12;
const COL_LANGUAGE: usize = 13;

/// Number of columns a record needs for every consumed field to be present
pub const MIN_COLUMNS: usize = COL_LANGUAGE + 1;

/// One row of a ManaBox collection export (only the consumed columns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManaboxRow {
    pub name: String,
    pub set_code: String,
    pub set_name: String,
    pub collector_number: String,
    pub foil: String,
    pub quantity: String,
    /// Scryfall ID, the key for Multiverse Bridge lookups
    pub scryfall_id: String,
    pub condition: String,
    pub language: String,
}

impl ManaboxRow {
    /// Build a row from a raw record by column position
    pub fn from_record(record: &StringRecord) -> Result<Self, RowError> {
        if record.len() < MIN_COLUMNS {
            return Err(RowError::MissingColumns {
                found: record.len(),
                expected: MIN_COLUMNS,
            });
        }
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        Ok(ManaboxRow {
            name: field(COL_NAME),
            set_code: field(COL_SET_CODE),
            set_name: field(COL_SET_NAME),
            collector_number: field(COL_COLLECTOR_NUMBER),
            foil: field(COL_FOIL),
            quantity: field(COL_QUANTITY),
            scryfall_id: field(COL_SCRYFALL_ID),
            condition: field(COL_CONDITION),
            language: field(COL_LANGUAGE),
        })
    }

    pub fn finish(&self) -> Finish {
        Finish::from_manabox(&self.foil)
    }

    pub fn parsed_language(&self) -> Result<Language, RowError> {
        self.language
            .parse::<Language>()
            .map_err(|e| RowError::UnknownLanguage(e.0))
    }

    pub fn parsed_quantity(&self) -> Result<u32, RowError> {
        self.quantity
            .trim()
            .parse()
            .map_err(|_| RowError::InvalidQuantity(self.quantity.clone()))
    }
}

/// One line of the Cardsphere import file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardsphereRow {
    pub count: u32,
    /// Cardsphere separates held from tradable copies; every imported copy is tradable
    pub tradelist_count: u32,
    pub name: String,
    pub edition: String,
    pub condition: &'static str,
    pub language: Language,
    pub finish: Finish,
    pub tags: String,
}

impl CardsphereRow {
    /// Cardsphere's import treats every card as Near Mint
    pub const CONDITION: &'static str = "Near Mint";

    pub fn new(
        count: u32,
        name: String,
        edition: String,
        language: Language,
        finish: Finish,
    ) -> Self {
        CardsphereRow {
            count,
            tradelist_count: count,
            name,
            edition,
            condition: Self::CONDITION,
            language,
            finish,
            tags: String::new(),
        }
    }
}

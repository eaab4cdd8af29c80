//! Card name rewrites: ASCII folding, numbered basics and reprints,
//! split/adventure/MDFC names and cosmetic fixes.

use unicode_normalization::UnicodeNormalization;

use crate::error::RowError;

use super::WorkingCard;

const BASIC_LANDS: [&str; 6] = ["plains", "island", "swamp", "mountain", "forest", "wastes"];

/// Sets with a single version of each basic, so no collector number in the name
const SINGLE_BASIC_SETS: [&str; 9] = ["BBD", "IXL", "RIX", "RNA", "GRN", "UNF", "REX", "UNH", "UNG"];

/// Sets whose basics keep one-digit collector numbers unpadded
const UNPADDED_BASIC_SETS: [&str; 2] = ["UND", "JMP"];

/// Sets where Cardsphere lists split/adventure/MDFC cards by front name only.
/// Older sets still use the full `A // B` name.
const FRONT_NAME_SETS: [&str; 18] = [
    "DKA", "SOI", "XLN", "BOT", "NEO", "AFC", "VOW", "MID", "DBL", "CLB", "MOM", "MOC", "CMM",
    "WOE", "WOC", "WHO", "LCI", "LCC",
];

const SPLIT_MARKER: &str = "//";

/// Unfinity fill-in-the-blank names are printed with a longer blank on Cardsphere
const SHORT_BLANK: &str = "_____";
const LONG_BLANK: &str = "________";

/// Decompose and drop everything outside ASCII ("Lim-Dûl" -> "Lim-Dul")
pub fn fold_to_ascii(name: &str) -> String {
    name.nfkd().filter(char::is_ascii).collect()
}

pub fn is_split_name(name: &str) -> bool {
    name.contains(SPLIT_MARKER)
}

pub fn is_basic_land(name: &str) -> bool {
    let lower = name.to_lowercase();
    BASIC_LANDS.contains(&lower.as_str())
}

/// Append `(#<number>)` to basics from sets with several art versions
pub fn number_basic_land(card: &mut WorkingCard) -> Result<(), RowError> {
    if !is_basic_land(&card.name) || SINGLE_BASIC_SETS.contains(&card.set_code.as_str()) {
        return Ok(());
    }

    let number = card.numeric_collector_number()?;
    if number < 100 && !UNPADDED_BASIC_SETS.contains(&card.set_code.as_str()) {
        card.collector_number.insert(0, '0');
    }
    // Cardsphere lists this Plains under its bare name
    if !(card.collector_number == "262" && card.name == "Plains") {
        append_number(card);
    }
    Ok(())
}

/// Reprints Cardsphere tells apart by collector number in the name
pub fn is_numbered_reprint(name: &str, set_code: &str) -> bool {
    match set_code {
        "WHO" => matches!(name, "Command Tower" | "Sonic Screwdriver"),
        "40K" => matches!(
            name,
            "Arcane Signet"
                | "Mind Stone"
                | "Command Tower"
                | "Commander's Sphere"
                | "Sol Ring"
                | "Talisman of Dominance"
                | "Wayfarer's Bauble"
        ),
        "GRN" => name.contains("Guildgate"),
        "KHM" => name.contains("Snow-Covered"),
        "LTC" => name == "Sol Ring",
        _ => false,
    }
}

pub fn number_reprint(card: &mut WorkingCard) {
    if is_numbered_reprint(&card.name, &card.set_code) {
        append_number(card);
    }
}

/// Keep only the front name for sets that list split cards that way
pub fn truncate_split_name(card: &mut WorkingCard) {
    if !FRONT_NAME_SETS.contains(&card.set_code.as_str()) {
        return;
    }
    if let Some((front, _)) = card.name.split_once(SPLIT_MARKER) {
        card.name = front.trim().to_string();
    }
}

/// Strip double quotes and widen fill-in-the-blank underscores
pub fn tidy_name(name: &str) -> String {
    let name = name.replace('"', "");
    if name.contains(SHORT_BLANK) {
        name.replace(SHORT_BLANK, LONG_BLANK)
    } else {
        name
    }
}

fn append_number(card: &mut WorkingCard) {
    card.name = format!("{} (#{})", card.name, card.collector_number);
}

//! Edition names that differ between ManaBox and Cardsphere.

/// ManaBox edition name -> Cardsphere edition name
const EDITION_SYNONYMS: [(&str, &str); 17] = [
    ("The List (Unfinity Foil Edition)", "The List - Unfinity"),
    ("30th Anniversary Play Promos", "30th Anniversary Promos"),
    ("Kaldheim Commander", "Kaldheim Commander Decks"),
    (
        "Forgotten Realms Commander",
        "Adventures in the Forgotten Realms Commander Decks",
    ),
    (
        "Midnight Hunt Commander",
        "Innistrad: Midnight Hunt Commander Decks",
    ),
    ("Crimson Vow Commander", "Innistrad: Crimson Vow Commander Decks"),
    ("Neon Dynasty Commander", "Kamigawa: Neon Dynasty Commander Decks"),
    ("New Capenna Commander", "Streets of New Capenna Commander"),
    (
        "The Brothers' War Retro Artifacts",
        "The Brothers' War - Retro Artifacts",
    ),
    (
        "Multiverse Legends",
        "March of the Machine - Multiverse Legends",
    ),
    (
        "Tales of Middle-earth Commander",
        "Lord of the Rings: Tales of Middle-earth - Commander",
    ),
    (
        "The Lost Caverns of Ixalan Commander",
        "The Lost Caverns of Ixalan - Commander",
    ),
    ("Secret Lair Drop", "Secret Lair Drop Series"),
    ("DCI Promos", "WPN and Gateway Promos"),
    (
        "Duels of the Planeswalkers 2015 Promos",
        "Duels of the Planeswalkers Game Promos",
    ),
    ("Love Your LGS", "Love Your Local Game Store Promos"),
    ("Legends Italian", "Legends"),
];

/// Substring -> edition that replaces the whole name
const EDITION_FAMILIES: [(&str, &str); 3] = [
    ("Convention Promo", "Convention"),
    ("Friday Night Magic", "FNM Promos"),
    // TODO: split WPN promos between "WPN and Gateway Promos" and "Miscellaneous Promos"
    ("Wizards Play Network", "Miscellaneous Promos"),
];

/// Substring -> replacement, for punctuation-only differences
const EDITION_SPELLINGS: [(&str, &str); 2] = [
    ("Theros Beyond Death", "Theros: Beyond Death"),
    ("The Lord of the Rings", "Lord of the Rings"),
];

/// Map a ManaBox set name onto the Cardsphere edition name
pub fn rewrite_edition(edition: &str) -> String {
    let mut edition = EDITION_SYNONYMS
        .iter()
        .find(|(manabox, _)| *manabox == edition)
        .map_or(edition, |&(_, cardsphere)| cardsphere)
        .to_string();

    for (pattern, replacement) in EDITION_FAMILIES {
        if edition.contains(pattern) {
            edition = replacement.to_string();
        }
    }
    for (pattern, replacement) in EDITION_SPELLINGS {
        if edition.contains(pattern) {
            edition = edition.replace(pattern, replacement);
        }
    }
    edition
}

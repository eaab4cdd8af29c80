//! Collector numbers that are not plain numbers.
//!
//! ManaBox encodes promo and variant printings in the collector number
//! (`123p`, `45s`, `12★`, `A07`, `123a`). Cardsphere uses the bare number and
//! carries the variant in the edition name instead.

use crate::error::RowError;

use super::WorkingCard;

/// Promo sets carry this prefix in front of the parent set code
pub const PROMO_SET_PREFIX: char = 'P';
/// Old foil printings have a star after the number
pub const STAR_FOIL: char = '★';

/// Full-art basics in Battle for Zendikar use `a`/`b` suffixes
const FULL_ART_SET: &str = "BFZ";
const UNFINITY: &str = "UNF";
// TODO: Fallen Empires, Homelands, Alliances, Chronicles art variants
const OLD_ALTERNATE_ART_SETS: [&str; 4] = ["FEM", "HML", "ALL", "CHR"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorSuffix {
    Numeric,
    /// `p`: planeswalker-stamped promo pack card
    PlaneswalkerStamp,
    /// `s`: date-stamped prerelease card
    PrereleaseStamp,
    StarFoil,
    /// `F`: 30th Anniversary festival card
    Festival,
    /// Leading `A`: resale promo
    Resale,
    /// Trailing `a`-`f` on a non-promo set
    AlternatePrinting,
    Unknown,
}

impl CollectorSuffix {
    pub fn classify(set_code: &str, collector_number: &str) -> Self {
        if is_numeric(collector_number) {
            return CollectorSuffix::Numeric;
        }
        let Some(last) = collector_number.chars().last() else {
            return CollectorSuffix::Unknown;
        };

        if set_code.starts_with(PROMO_SET_PREFIX) || last == STAR_FOIL {
            match last {
                'p' => CollectorSuffix::PlaneswalkerStamp,
                's' => CollectorSuffix::PrereleaseStamp,
                STAR_FOIL => CollectorSuffix::StarFoil,
                'F' => CollectorSuffix::Festival,
                _ if collector_number.starts_with('A') && !collector_number.contains('-') => {
                    CollectorSuffix::Resale
                }
                _ => CollectorSuffix::Unknown,
            }
        } else if is_alternate_suffix(last) {
            CollectorSuffix::AlternatePrinting
        } else {
            CollectorSuffix::Unknown
        }
    }
}

/// Every character numeric, at least one character
pub fn is_numeric(collector_number: &str) -> bool {
    !collector_number.is_empty() && collector_number.chars().all(char::is_numeric)
}

/// ManaBox's `a`-`f` variant letters
pub fn is_alternate_suffix(c: char) -> bool {
    matches!(c, 'a'..='f')
}

/// Rewrite collector number, set code and edition for the card's suffix kind
pub fn resolve_suffix(card: &mut WorkingCard) -> Result<CollectorSuffix, RowError> {
    let suffix = CollectorSuffix::classify(&card.set_code, &card.collector_number);

    match suffix {
        CollectorSuffix::Numeric => {
            if card.set_code.starts_with(PROMO_SET_PREFIX) {
                card.edition = card.edition.replace(" Promos", "");
                card.collector_number.retain(|c| c.is_ascii_digit());
            }
        }
        CollectorSuffix::PlaneswalkerStamp => {
            card.collector_number.pop();
            card.edition = format!("{} - Promo Pack", card.edition.replace(" Promos", ""));
            strip_set_prefix(card);
        }
        CollectorSuffix::PrereleaseStamp => {
            card.collector_number.pop();
            card.edition = format!(
                "{} - Prerelease Promos",
                card.edition.replace(" Promos", "")
            );
            strip_set_prefix(card);
        }
        CollectorSuffix::StarFoil => {
            card.collector_number.pop();
            strip_set_prefix(card);
        }
        CollectorSuffix::Festival => {
            card.collector_number.pop();
            card.edition = "30th Anniversary".to_string();
            strip_set_prefix(card);
        }
        CollectorSuffix::Resale => {
            card.collector_number.remove(0);
            strip_set_prefix(card);
        }
        CollectorSuffix::AlternatePrinting => match card.set_code.as_str() {
            FULL_ART_SET => {
                card.collector_number.pop();
                card.name.push_str(" (Full Art)");
            }
            UNFINITY => {
                return Err(RowError::UnfinityAttractions {
                    set_code: card.set_code.clone(),
                })
            }
            set if OLD_ALTERNATE_ART_SETS.contains(&set) => {
                return Err(RowError::OldAlternateArt {
                    set_code: card.set_code.clone(),
                })
            }
            _ => return Err(unknown_promo(card)),
        },
        CollectorSuffix::Unknown => return Err(unknown_promo(card)),
    }
    Ok(suffix)
}

/// `PM21` -> `M21`
fn strip_set_prefix(card: &mut WorkingCard) {
    if !card.set_code.is_empty() {
        card.set_code.remove(0);
    }
}

fn unknown_promo(card: &WorkingCard) -> RowError {
    RowError::UnknownPromo {
        collector_number: card.collector_number.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(set_code: &str, edition: &str, collector_number: &str) -> WorkingCard {
        WorkingCard {
            name: "Test Card".into(),
            edition: edition.into(),
            set_code: set_code.into(),
            collector_number: collector_number.into(),
        }
    }

    #[test]
    fn classify_covers_every_kind() {
        use CollectorSuffix::*;
        assert_eq!(CollectorSuffix::classify("MH2", "250"), Numeric);
        assert_eq!(CollectorSuffix::classify("PM21", "25p"), PlaneswalkerStamp);
        assert_eq!(CollectorSuffix::classify("PM21", "25s"), PrereleaseStamp);
        assert_eq!(CollectorSuffix::classify("6ED", "12★"), StarFoil);
        assert_eq!(CollectorSuffix::classify("P30A", "3F"), Festival);
        assert_eq!(CollectorSuffix::classify("PRES", "A07"), Resale);
        assert_eq!(CollectorSuffix::classify("BFZ", "250a"), AlternatePrinting);
        assert_eq!(CollectorSuffix::classify("MH2", "250z"), Unknown);
        assert_eq!(CollectorSuffix::classify("PRES", "A-07"), Unknown);
        assert_eq!(CollectorSuffix::classify("MH2", ""), Unknown);
    }

    #[test]
    fn promo_prefix_takes_precedence_over_alternate_letter() {
        // 'a' on a promo set is not an alternate printing
        assert_eq!(
            CollectorSuffix::classify("PLCI", "12a"),
            CollectorSuffix::Unknown
        );
    }

    #[test]
    fn planeswalker_stamp_becomes_promo_pack() {
        let mut c = card("PM21", "Core Set 2021 Promos", "25p");
        assert_eq!(
            resolve_suffix(&mut c),
            Ok(CollectorSuffix::PlaneswalkerStamp)
        );
        assert_eq!(c.collector_number, "25");
        assert_eq!(c.edition, "Core Set 2021 - Promo Pack");
        assert_eq!(c.set_code, "M21");
    }

    #[test]
    fn prerelease_stamp_becomes_prerelease_promos() {
        let mut c = card("PKHM", "Kaldheim Promos", "100s");
        resolve_suffix(&mut c).unwrap();
        assert_eq!(c.collector_number, "100");
        assert_eq!(c.edition, "Kaldheim - Prerelease Promos");
        assert_eq!(c.set_code, "KHM");
    }

    #[test]
    fn star_foil_only_strips_star_and_set_letter() {
        let mut c = card("6ED", "Classic Sixth Edition", "12★");
        resolve_suffix(&mut c).unwrap();
        assert_eq!(c.collector_number, "12");
        assert_eq!(c.edition, "Classic Sixth Edition");
        assert_eq!(c.set_code, "ED");
    }

    #[test]
    fn festival_card_forces_anniversary_edition() {
        let mut c = card("P30A", "30th Anniversary Play Promos", "3F");
        resolve_suffix(&mut c).unwrap();
        assert_eq!(c.collector_number, "3");
        assert_eq!(c.edition, "30th Anniversary");
        assert_eq!(c.set_code, "30A");
    }

    #[test]
    fn resale_promo_drops_leading_letter() {
        let mut c = card("PRES", "Resale Promos", "A07");
        resolve_suffix(&mut c).unwrap();
        assert_eq!(c.collector_number, "07");
        assert_eq!(c.edition, "Resale Promos");
        assert_eq!(c.set_code, "RES");
    }

    #[test]
    fn numeric_promo_drops_promos_suffix_but_keeps_set_code() {
        let mut c = card("PM21", "Core Set 2021 Promos", "25");
        assert_eq!(resolve_suffix(&mut c), Ok(CollectorSuffix::Numeric));
        assert_eq!(c.edition, "Core Set 2021");
        assert_eq!(c.collector_number, "25");
        assert_eq!(c.set_code, "PM21");
    }

    #[test]
    fn numeric_regular_card_is_untouched() {
        let mut c = card("MH2", "Modern Horizons 2", "250");
        resolve_suffix(&mut c).unwrap();
        assert_eq!(c, card("MH2", "Modern Horizons 2", "250"));
    }

    #[test]
    fn battle_for_zendikar_alternates_are_full_art() {
        let mut c = card("BFZ", "Battle for Zendikar", "250a");
        c.name = "Plains".into();
        resolve_suffix(&mut c).unwrap();
        assert_eq!(c.collector_number, "250");
        assert_eq!(c.name, "Plains (Full Art)");
        assert_eq!(c.set_code, "BFZ");
    }

    #[test]
    fn unsupported_alternates_are_errors() {
        let mut c = card("UNF", "Unfinity", "123a");
        assert_eq!(
            resolve_suffix(&mut c),
            Err(RowError::UnfinityAttractions {
                set_code: "UNF".into()
            })
        );

        let mut c = card("HML", "Homelands", "12b");
        assert_eq!(
            resolve_suffix(&mut c),
            Err(RowError::OldAlternateArt {
                set_code: "HML".into()
            })
        );

        let mut c = card("MH2", "Modern Horizons 2", "12c");
        assert_eq!(
            resolve_suffix(&mut c),
            Err(RowError::UnknownPromo {
                collector_number: "12c".into()
            })
        );
    }

    #[test]
    fn unknown_promo_pattern_is_an_error() {
        let mut c = card("PLG21", "Love Your LGS 2021", "J12x");
        assert_eq!(
            resolve_suffix(&mut c),
            Err(RowError::UnknownPromo {
                collector_number: "J12x".into()
            })
        );
    }
}

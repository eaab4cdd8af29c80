//! Multiverse Bridge client
//!
//! Multiverse Bridge maps Scryfall IDs onto Cardsphere's catalog. It is used
//! for The List reprints and for printings ManaBox marks with a letter suffix.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ExportError, Result};

pub const DEFAULT_BRIDGE_URL: &str = "https://www.multiversebridge.com/api/v1/cards/scryfall";

const USER_AGENT: &str = "D2D-Automations-CardsphereExport/1.0";

/// A Cardsphere card as reported by Multiverse Bridge
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BridgeCard {
    pub name: String,
    pub edition: String,
    pub collector_number: String,
}

/// Resolves a Scryfall ID to the matching Cardsphere printings
pub trait CardResolver {
    /// An empty list means the card could not be resolved
    fn resolve(&self, scryfall_id: &str) -> Result<Vec<BridgeCard>>;
}

/// Blocking HTTP client for the Multiverse Bridge API
#[derive(Debug, Clone)]
pub struct MultiverseBridge {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl MultiverseBridge {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(MultiverseBridge {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build().map_err(ExportError::Client)?,
        })
    }

    pub fn url_for(&self, scryfall_id: &str) -> String {
        format!("{}/{}", self.base_url, scryfall_id)
    }
}

impl CardResolver for MultiverseBridge {
    fn resolve(&self, scryfall_id: &str) -> Result<Vec<BridgeCard>> {
        let url = self.url_for(scryfall_id);
        log::debug!("Fetching card from Multiverse Bridge: {}", url);

        let network = |source: reqwest::Error| ExportError::Network {
            catalog_id: scryfall_id.to_string(),
            source,
        };

        let response = self.client.get(&url).send().map_err(network)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            log::warn!("Multiverse Bridge has no card for {}", scryfall_id);
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(ExportError::Status {
                catalog_id: scryfall_id.to_string(),
                status,
            });
        }

        let body = response.text().map_err(network)?;
        Ok(parse_cards(&body, scryfall_id))
    }
}

/// A 2xx body that is not a JSON array of cards counts as "no match"
fn parse_cards(body: &str, scryfall_id: &str) -> Vec<BridgeCard> {
    match serde_json::from_str::<Vec<BridgeCard>>(body) {
        Ok(cards) => cards,
        Err(e) => {
            log::warn!(
                "Unexpected Multiverse Bridge response for {}: {}",
                scryfall_id,
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;

//! Cardsphere Export - ManaBox to Cardsphere converter
//!
//! Reads a ManaBox collection CSV export, reconciles card names and editions
//! with the Cardsphere catalog (override tables plus Multiverse Bridge lookups
//! for ambiguous printings) and writes a Cardsphere import CSV.

pub mod bridge;
pub mod error;
pub mod export;
pub mod models;
pub mod normalizer;
pub mod output;
pub mod overrides;
pub mod throttle;

pub use bridge::{BridgeCard, CardResolver, MultiverseBridge, DEFAULT_BRIDGE_URL};
pub use error::{ExportError, Result, RowError};
pub use export::{convert, run, ExportConfig, ExportSummary};
pub use models::{CardsphereRow, ManaboxRow};
pub use normalizer::{Normalized, Normalizer};
pub use output::{CardsphereWriter, ErrorLog};
pub use overrides::{EditionRange, NameOverride, Overrides};
pub use throttle::LookupThrottle;

//! Shared MTG vocabulary used by the collection export tools.

pub mod finish;
pub mod language;

pub use finish::Finish;
pub use language::{Language, ParseLanguageError};

//! Locale- and recency-aware timestamp rendering.

mod formatter;
mod phrases;

pub use formatter::{TimeFormatter, UNKNOWN_DATE_PLACEHOLDER};
pub use phrases::{
    ClockStyle, DateStyle, LocaleRegistry, PhraseTable, RelativePhrases, DEFAULT_LOCALE,
};

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use super::phrases::{LocaleRegistry, PhraseTable};
use crate::errors::TimeFormatError;
use crate::ports::{ClockPort, LocalePort};

/// Shown in place of a timestamp that could not be parsed.
pub const UNKNOWN_DATE_PLACEHOLDER: &str = "unknown date";

/// Renders ISO-8601 timestamps relative to the injected clock and locale.
///
/// Every call reads the clock again; nothing is cached between calls.
#[derive(Clone)]
pub struct TimeFormatter {
    clock: Arc<dyn ClockPort>,
    locale: Arc<dyn LocalePort>,
    registry: Arc<LocaleRegistry>,
}

impl TimeFormatter {
    pub fn new(clock: Arc<dyn ClockPort>, locale: Arc<dyn LocalePort>) -> Self {
        Self::with_registry(clock, locale, Arc::new(LocaleRegistry::builtin()))
    }

    pub fn with_registry(
        clock: Arc<dyn ClockPort>,
        locale: Arc<dyn LocalePort>,
        registry: Arc<LocaleRegistry>,
    ) -> Self {
        Self {
            clock,
            locale,
            registry,
        }
    }

    /// `today @ <time>`, `yesterday @ <time>` or `<full date> @ <time>`.
    ///
    /// Days are compared as calendar dates in the caller's timezone, and
    /// "yesterday" is the previous calendar date rather than 24 hours ago.
    ///
    /// # Errors
    ///
    /// Returns [`TimeFormatError::MalformedTimestamp`] when `timestamp` is not
    /// a valid RFC 3339 instant.
    pub fn localize(&self, timestamp: &str) -> Result<String, TimeFormatError> {
        let instant = parse_timestamp(timestamp)?;
        let table = self.phrase_table();

        let local = self.to_local(instant);
        let today = self.to_local(self.clock.now()).date_naive();
        let day = local.date_naive();
        let time = table.format_time(&local);

        if day == today {
            Ok(format!("{} @ {}", table.today, time))
        } else if Some(day) == today.pred_opt() {
            Ok(format!("{} @ {}", table.yesterday, time))
        } else {
            Ok(format!("{} @ {}", table.format_date(&local), time))
        }
    }

    /// Recency phrase such as `45 seconds ago`, or an empty string once the
    /// timestamp is an hour or more in the past.
    ///
    /// # Errors
    ///
    /// Returns [`TimeFormatError::MalformedTimestamp`] for unparseable input.
    pub fn relative_delta(&self, timestamp: &str) -> Result<String, TimeFormatError> {
        let instant = parse_timestamp(timestamp)?;
        let elapsed = self
            .clock
            .now()
            .signed_duration_since(instant)
            .num_seconds();
        Ok(self.phrase_table().relative(elapsed))
    }

    /// `" (<phrase>)"`, or nothing when there is no recency phrase.
    pub fn delta_suffix(&self, timestamp: &str) -> Result<String, TimeFormatError> {
        let phrase = self.relative_delta(timestamp)?;
        if phrase.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!(" ({phrase})"))
        }
    }

    fn phrase_table(&self) -> &PhraseTable {
        self.registry.resolve(&self.locale.locale_tag())
    }

    fn to_local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.locale.utc_offset_at(instant))
    }
}

fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, TimeFormatError> {
    DateTime::parse_from_rfc3339(timestamp.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| TimeFormatError::MalformedTimestamp {
            input: timestamp.to_string(),
            reason: err.to_string(),
        })
}

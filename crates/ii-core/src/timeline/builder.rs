use std::fmt;

use serde::Serialize;

use super::ordinal;
use crate::ingest::RawEvent;

/// Substring marking an event as a failure. Matched case-sensitively, so
/// "Bag Failed verification" is not flagged.
pub const FAILURE_MARKER: &str = "failed";

/// Link text used for an event's external logs.
pub const LOG_LINK_TEXT: &str = "dev logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FootnotePart {
    Attempt(String),
    LogLink(String),
}

/// Parenthetical annotation after an event description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    pub parts: Vec<FootnotePart>,
}

impl Footnote {
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Plain-text rendering: `(2nd attempt / dev logs)`, `(dev logs)` or `()`.
impl fmt::Display for Footnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<&str> = self
            .parts
            .iter()
            .map(|part| match part {
                FootnotePart::Attempt(label) => label.as_str(),
                FootnotePart::LogLink(_) => LOG_LINK_TEXT,
            })
            .collect();
        write!(f, "({})", rendered.join(" / "))
    }
}

/// One display-ready timeline entry, derived fresh per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub description: String,
    pub created_date: String,
    pub failed: bool,
    pub unmatched_start: bool,
    pub attempt_label: Option<String>,
    pub log_link: Option<String>,
    pub needs_footnote: bool,
}

impl DisplayEvent {
    pub fn from_raw(event: &RawEvent) -> Self {
        let failed = event.description.contains(FAILURE_MARKER);
        let attempt_label = event
            .repeated
            .then(|| format!("{} attempt", ordinal(event.attempt_count)));
        // Upstream sends an empty URL when it cannot tell which service
        // logged the event.
        let log_link = event.log_url.clone().filter(|url| !url.is_empty());

        Self {
            description: event.description.clone(),
            created_date: event.created_date.clone(),
            failed,
            unmatched_start: event.unmatched_start,
            attempt_label,
            log_link,
            needs_footnote: failed || event.unmatched_start || event.repeated,
        }
    }

    /// `None` unless the event is failed, an unmatched start or repeated.
    pub fn footnote(&self) -> Option<Footnote> {
        if !self.needs_footnote {
            return None;
        }

        let mut parts = Vec::with_capacity(2);
        if let Some(label) = &self.attempt_label {
            parts.push(FootnotePart::Attempt(label.clone()));
        }
        if let Some(url) = &self.log_link {
            parts.push(FootnotePart::LogLink(url.clone()));
        }
        Some(Footnote { parts })
    }
}

pub struct EventTimelineBuilder;

impl EventTimelineBuilder {
    /// One entry per input event, in input order.
    pub fn build(events: &[RawEvent]) -> Vec<DisplayEvent> {
        events.iter().map(DisplayEvent::from_raw).collect()
    }
}

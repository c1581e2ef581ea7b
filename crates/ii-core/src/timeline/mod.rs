//! Event timeline: turns annotated lifecycle events into display entries.

mod builder;
mod ordinal;

pub use builder::{
    DisplayEvent, EventTimelineBuilder, Footnote, FootnotePart, FAILURE_MARKER, LOG_LINK_TEXT,
};
pub use ordinal::ordinal;

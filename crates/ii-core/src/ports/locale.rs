use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Caller's locale and timezone.
pub trait LocalePort: Send + Sync {
    /// BCP 47 tag such as `en-US` or `de-DE`.
    fn locale_tag(&self) -> String;

    /// Offset of the caller's timezone at `instant`.
    fn utc_offset_at(&self, instant: DateTime<Utc>) -> FixedOffset;
}

/// Fixed locale and offset, for configuration overrides and tests.
#[derive(Debug, Clone)]
pub struct FixedLocale {
    tag: String,
    offset: FixedOffset,
}

impl FixedLocale {
    pub fn new(tag: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            tag: tag.into(),
            offset,
        }
    }

    pub fn utc(tag: impl Into<String>) -> Self {
        Self::new(tag, Utc.fix())
    }
}

impl LocalePort for FixedLocale {
    fn locale_tag(&self) -> String {
        self.tag.clone()
    }

    fn utc_offset_at(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}

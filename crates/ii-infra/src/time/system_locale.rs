use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use ii_core::ports::LocalePort;
use ii_core::time_format::DEFAULT_LOCALE;

/// Checked in order; the first non-empty value wins.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Locale and timezone of the running process.
///
/// The tag comes from the configured override, else the POSIX locale
/// variables. The offset follows the system timezone, including DST.
pub struct SystemLocale {
    tag: String,
}

impl SystemLocale {
    pub fn detect(override_tag: Option<&str>) -> Self {
        let tag = override_tag
            .filter(|tag| !tag.trim().is_empty())
            .map(str::to_string)
            .or_else(|| tag_from_env(|name| std::env::var(name).ok()))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        Self { tag }
    }
}

fn tag_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .filter(|value| !matches!(value.as_str(), "C" | "POSIX") && !value.starts_with("C."))
}

impl LocalePort for SystemLocale {
    fn locale_tag(&self) -> String {
        self.tag.clone()
    }

    fn utc_offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

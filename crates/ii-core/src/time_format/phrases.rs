use std::collections::HashMap;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Wed, October 14, 2026`
    WeekdayMonthDayYear,
    /// `Mi., 14. Oktober 2026`
    WeekdayDayMonthYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    /// `9:05 AM`
    TwelveHour,
    /// `09:05`
    TwentyFourHour,
}

/// Recency phrases. `{n}` in a template is replaced by the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePhrases {
    pub just_now: &'static str,
    pub seconds_ago: &'static str,
    pub one_minute_ago: &'static str,
    pub minutes_ago: &'static str,
}

/// Everything needed to phrase a timestamp in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    pub today: &'static str,
    pub yesterday: &'static str,
    /// Monday first.
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    pub date_style: DateStyle,
    pub clock_style: ClockStyle,
    pub relative: RelativePhrases,
}

impl PhraseTable {
    pub fn english() -> Self {
        Self {
            today: "today",
            yesterday: "yesterday",
            weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            date_style: DateStyle::WeekdayMonthDayYear,
            clock_style: ClockStyle::TwelveHour,
            relative: RelativePhrases {
                just_now: "just now",
                seconds_ago: "{n} seconds ago",
                one_minute_ago: "1 minute ago",
                minutes_ago: "{n} minutes ago",
            },
        }
    }

    pub fn german() -> Self {
        Self {
            today: "heute",
            yesterday: "gestern",
            weekdays: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
            months: [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            date_style: DateStyle::WeekdayDayMonthYear,
            clock_style: ClockStyle::TwentyFourHour,
            relative: RelativePhrases {
                just_now: "gerade eben",
                seconds_ago: "vor {n} Sekunden",
                one_minute_ago: "vor 1 Minute",
                minutes_ago: "vor {n} Minuten",
            },
        }
    }

    pub fn format_date(&self, local: &DateTime<FixedOffset>) -> String {
        let weekday = self.weekdays[local.weekday().num_days_from_monday() as usize];
        let month = self.months[local.month0() as usize];
        match self.date_style {
            DateStyle::WeekdayMonthDayYear => {
                format!("{weekday}, {month} {}, {}", local.day(), local.year())
            }
            DateStyle::WeekdayDayMonthYear => {
                format!("{weekday}, {}. {month} {}", local.day(), local.year())
            }
        }
    }

    /// Hour, minute and zone abbreviation.
    pub fn format_time(&self, local: &DateTime<FixedOffset>) -> String {
        let zone = zone_abbreviation(local.offset());
        match self.clock_style {
            ClockStyle::TwelveHour => {
                let (is_pm, hour) = local.hour12();
                let meridiem = if is_pm { "PM" } else { "AM" };
                format!("{hour}:{:02} {meridiem} {zone}", local.minute())
            }
            ClockStyle::TwentyFourHour => {
                format!("{:02}:{:02} {zone}", local.hour(), local.minute())
            }
        }
    }

    /// Phrase for `elapsed_seconds`, empty once an hour has passed.
    pub fn relative(&self, elapsed_seconds: i64) -> String {
        let phrases = &self.relative;
        match elapsed_seconds {
            s if s < 5 => phrases.just_now.to_string(),
            s if s < 60 => phrases.seconds_ago.replace("{n}", &s.to_string()),
            s if s < 2 * 60 => phrases.one_minute_ago.to_string(),
            s if s < 60 * 60 => phrases.minutes_ago.replace("{n}", &(s / 60).to_string()),
            _ => String::new(),
        }
    }
}

/// `UTC` for a zero offset, otherwise `UTC+1`, `UTC-4`, `UTC+5:30`.
fn zone_abbreviation(offset: &FixedOffset) -> String {
    let total = offset.local_minus_utc();
    if total == 0 {
        return "UTC".to_string();
    }
    let sign = if total < 0 { '-' } else { '+' };
    let minutes = total.abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}

pub const DEFAULT_LOCALE: &str = "en-US";

/// Phrase tables keyed by locale tag.
///
/// Lookup tries the exact tag, then its primary language, then the default
/// table. Tags compare case-insensitively and `_` is treated as `-`.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    tables: HashMap<String, PhraseTable>,
    default_table: PhraseTable,
}

impl LocaleRegistry {
    pub fn empty(default_tag: &str, default_table: PhraseTable) -> Self {
        let mut registry = Self {
            tables: HashMap::new(),
            default_table: default_table.clone(),
        };
        registry.register(default_tag, default_table);
        registry
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty(DEFAULT_LOCALE, PhraseTable::english());
        registry.register("en", PhraseTable::english());
        registry.register("de-DE", PhraseTable::german());
        registry.register("de", PhraseTable::german());
        registry
    }

    pub fn register(&mut self, tag: &str, table: PhraseTable) {
        self.tables.insert(normalize_tag(tag), table);
    }

    pub fn resolve(&self, tag: &str) -> &PhraseTable {
        let tag = normalize_tag(tag);
        let language = tag.split('-').next().unwrap_or_default();

        self.tables
            .get(&tag)
            .or_else(|| self.tables.get(language))
            .unwrap_or(&self.default_table)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_tag(tag: &str) -> String {
    // `de_DE.UTF-8` style POSIX tags carry an encoding suffix.
    let tag = tag.split('.').next().unwrap_or_default();
    tag.replace('_', "-").to_ascii_lowercase()
}

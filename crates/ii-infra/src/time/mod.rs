mod system_clock;
mod system_locale;

pub use system_clock::SystemClock;
pub use system_locale::SystemLocale;

use chrono::{DateTime, Utc};

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(test)]
mockall::mock! {
    pub Clock {}

    impl ClockPort for Clock {
        fn now(&self) -> DateTime<Utc>;
    }
}

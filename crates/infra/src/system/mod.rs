use chrono::{NaiveDateTime, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current civil date and time (UTC)
    fn get_datetime(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn get_datetime(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Frozen clock for tests
pub struct FakeSys {
    pub now: NaiveDateTime,
}
impl ISys for FakeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.and_utc().timestamp_millis()
    }

    fn get_datetime(&self) -> NaiveDateTime {
        self.now
    }
}

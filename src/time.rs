//! Server-side timestamps for logged events.
//!
//! Every persisted event carries the wall-clock time in Tokyo, rendered as
//! `YYYY/MM/DD HH:MM:SS`. The host's own time zone and locale never leak in.

use chrono::{DateTime, FixedOffset, Utc};

/// Asia/Tokyo is UTC+09:00 all year round (no daylight saving).
const TOKYO_OFFSET_SECS: i32 = 9 * 3600;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Source of "now". Swapped out in tests to pin the instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn tokyo_timestamp(&self) -> String {
        format_tokyo(self.now())
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn format_tokyo(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&tokyo())
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

fn tokyo() -> FixedOffset {
    FixedOffset::east_opt(TOKYO_OFFSET_SECS).expect("UTC+09:00 is a valid offset")
}

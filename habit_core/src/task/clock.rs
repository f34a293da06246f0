//! Clock - Source of "now" and end-of-day instants

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

/// Supplies the current instant and the deadline for "due today"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Last millisecond of the current calendar day
    fn end_of_day(&self) -> DateTime<Utc>;
}

/// Wall clock in the machine's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn end_of_day(&self) -> DateTime<Utc> {
        end_of_day_in(self.now(), &Local)
    }
}

/// A clock frozen at one instant, with the calendar in a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Frozen clock whose calendar day is the UTC day
    pub fn utc(now: DateTime<Utc>) -> Self {
        FixedClock {
            now,
            offset: Utc.fix(),
        }
    }

    pub fn with_offset(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        FixedClock { now, offset }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn end_of_day(&self) -> DateTime<Utc> {
        end_of_day_in(self.now, &self.offset)
    }
}

/// 23:59:59.999 on the calendar day containing `instant` in `tz`
///
/// Falls back to `instant` itself when that local time does not exist.
pub fn end_of_day_in<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let local_date = instant.with_timezone(tz).date_naive();
    let Some(end) = local_date.and_hms_milli_opt(23, 59, 59, 999) else {
        return instant;
    };

    match tz.from_local_datetime(&end).latest() {
        Some(end) => end.with_timezone(&Utc),
        None => instant,
    }
}

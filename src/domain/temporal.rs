//! Temporal utilities
//!
//! Elapsed-time labels for display and calendar-day range arithmetic for the
//! date filter. Range checks work on local wall-clock values; callers convert
//! stored UTC instants with [`to_local`] first.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::schemas::DateFilterMode;

/// Coarse "how long ago" bucket, using the largest unit that applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedLabel {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl std::fmt::Display for ElapsedLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElapsedLabel::JustNow => write!(f, "just now"),
            ElapsedLabel::Minutes(1) => write!(f, "1 minute ago"),
            ElapsedLabel::Minutes(n) => write!(f, "{} minutes ago", n),
            ElapsedLabel::Hours(1) => write!(f, "1 hour ago"),
            ElapsedLabel::Hours(n) => write!(f, "{} hours ago", n),
            ElapsedLabel::Days(1) => write!(f, "1 day ago"),
            ElapsedLabel::Days(n) => write!(f, "{} days ago", n),
        }
    }
}

/// Bucket the time between `past` and `now`.
///
/// Instants in the future are reported as just now.
pub fn elapsed_label(past: DateTime<Utc>, now: DateTime<Utc>) -> ElapsedLabel {
    let elapsed = now.signed_duration_since(past);

    if elapsed.num_days() >= 1 {
        ElapsedLabel::Days(elapsed.num_days())
    } else if elapsed.num_hours() >= 1 {
        ElapsedLabel::Hours(elapsed.num_hours())
    } else if elapsed.num_minutes() >= 1 {
        ElapsedLabel::Minutes(elapsed.num_minutes())
    } else {
        ElapsedLabel::JustNow
    }
}

/// Wall-clock value of a stored instant in the given zone
pub fn to_local<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}

/// Midnight at the start of a calendar day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last millisecond of a calendar day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Calendar-day containment, inclusive on both ends.
///
/// Time of day is discarded from all three values before comparing, so a
/// range ending at 00:00:01 still contains 23:59:59 of the same day.
pub fn is_within_day_range(
    instant: NaiveDateTime,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> bool {
    let day = instant.date();
    day >= start.date() && day <= end.date()
}

/// A concrete local wall-clock window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl LocalRange {
    /// Window spanning whole calendar days from `first` to `last`
    pub fn days(first: NaiveDate, last: NaiveDate) -> Self {
        LocalRange {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        is_within_day_range(instant, self.start, self.end)
    }
}

/// Resolve a named date filter against the current calendar day.
///
/// Returns `None` for `all` and `custom`, which are not anchored to today.
pub fn resolve_named_range(mode: DateFilterMode, today: NaiveDate) -> Option<LocalRange> {
    match mode {
        DateFilterMode::Today => Some(LocalRange::days(today, today)),
        DateFilterMode::Yesterday => {
            let yesterday = today - Duration::days(1);
            Some(LocalRange::days(yesterday, yesterday))
        }
        DateFilterMode::Last7Days => Some(LocalRange::days(today - Duration::days(7), today)),
        DateFilterMode::Last30Days => Some(LocalRange::days(today - Duration::days(30), today)),
        DateFilterMode::All | DateFilterMode::Custom => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_elapsed_label_buckets() {
        let now = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();

        assert_eq!(elapsed_label(now - Duration::seconds(59), now), ElapsedLabel::JustNow);
        assert_eq!(elapsed_label(now - Duration::seconds(60), now), ElapsedLabel::Minutes(1));
        assert_eq!(elapsed_label(now - Duration::minutes(59), now), ElapsedLabel::Minutes(59));
        assert_eq!(elapsed_label(now - Duration::minutes(60), now), ElapsedLabel::Hours(1));
        assert_eq!(elapsed_label(now - Duration::hours(23), now), ElapsedLabel::Hours(23));
        assert_eq!(elapsed_label(now - Duration::hours(24), now), ElapsedLabel::Days(1));
        assert_eq!(elapsed_label(now - Duration::days(40), now), ElapsedLabel::Days(40));
    }

    #[test]
    fn test_elapsed_label_future_is_just_now() {
        let now = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(elapsed_label(now + Duration::hours(3), now), ElapsedLabel::JustNow);
    }

    #[test]
    fn test_same_day_different_times_match() {
        let created = at(2030, 3, 10, 23, 59, 59);
        let start = at(2030, 3, 10, 0, 0, 1);
        let end = at(2030, 3, 10, 0, 0, 1);

        // end is earlier than created as an instant, but the same calendar day
        assert!(end < created);
        assert!(is_within_day_range(created, start, end));
    }

    #[test]
    fn test_day_range_is_inclusive_on_both_ends() {
        let start = at(2030, 3, 10, 15, 0, 0);
        let end = at(2030, 3, 12, 9, 0, 0);

        assert!(is_within_day_range(at(2030, 3, 10, 0, 0, 0), start, end));
        assert!(is_within_day_range(at(2030, 3, 12, 23, 59, 59), start, end));
        assert!(!is_within_day_range(at(2030, 3, 9, 23, 59, 59), start, end));
        assert!(!is_within_day_range(at(2030, 3, 13, 0, 0, 0), start, end));
    }

    #[test]
    fn test_end_of_day() {
        let end = end_of_day(date(2030, 3, 10));
        assert_eq!(end.date(), date(2030, 3, 10));
        assert_eq!(end.hour(), 23);
        assert_eq!(end.minute(), 59);
        assert_eq!(end.second(), 59);
    }

    #[test]
    fn test_resolve_today_and_yesterday() {
        let today = date(2030, 3, 1);

        let range = resolve_named_range(DateFilterMode::Today, today).unwrap();
        assert_eq!(range.start, start_of_day(today));
        assert_eq!(range.end, end_of_day(today));

        // crosses a month boundary
        let range = resolve_named_range(DateFilterMode::Yesterday, today).unwrap();
        assert_eq!(range.start.date(), date(2030, 2, 28));
        assert_eq!(range.end.date(), date(2030, 2, 28));
    }

    #[test]
    fn test_resolve_rolling_windows() {
        let today = date(2030, 3, 31);

        let range = resolve_named_range(DateFilterMode::Last7Days, today).unwrap();
        assert_eq!(range.start, start_of_day(date(2030, 3, 24)));
        assert_eq!(range.end, end_of_day(today));

        let range = resolve_named_range(DateFilterMode::Last30Days, today).unwrap();
        assert_eq!(range.start.date(), date(2030, 3, 1));
        assert!(range.contains(at(2030, 3, 1, 0, 0, 0)));
        assert!(!range.contains(at(2030, 2, 28, 23, 59, 59)));
    }

    #[test]
    fn test_resolve_unanchored_modes() {
        let today = date(2030, 3, 31);
        assert!(resolve_named_range(DateFilterMode::All, today).is_none());
        assert!(resolve_named_range(DateFilterMode::Custom, today).is_none());
    }

    #[test]
    fn test_to_local_shifts_calendar_day() {
        // 01:30 UTC is still the previous evening three hours west of UTC
        let instant = Utc.with_ymd_and_hms(2030, 3, 10, 1, 30, 0).unwrap();
        let west = FixedOffset::west_opt(3 * 3600).unwrap();

        assert_eq!(to_local(&instant, &west).date(), date(2030, 3, 9));
        assert_eq!(to_local(&instant, &Utc).date(), date(2030, 3, 10));
    }
}

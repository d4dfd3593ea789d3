//! Weekly time model.
//!
//! Times are minute-resolution offsets from midnight on a [`Weekday`].
//! There is no date or timezone concept: a catalog describes a repeating
//! weekly pattern.
//!
//! # Overlap Rule
//! Intervals are half-open `[start, end)`. Two intervals conflict iff they
//! fall on the same day and `a.start < b.end && b.start < a.end`, so
//! 09:00-10:00 and 10:00-11:00 do not conflict.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Zero-based position, Monday = 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Accepts full names and three-letter abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                lower == name || lower == name[..3]
            })
            .ok_or_else(|| ScheduleError::MalformedDay(s.to_string()))
    }
}

impl TryFrom<String> for Weekday {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.name().to_string()
    }
}

/// A time of day with minute resolution.
///
/// Valid range is `00:00..=24:00`; `24:00` exists only so a slot can end
/// at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from hour and minute.
    ///
    /// Returns `None` outside `00:00..=24:00`.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        let total = hour.checked_mul(60)?.checked_add(minute)?;
        (total <= MINUTES_PER_DAY).then_some(Self(total))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component.
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component.
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parses `H:MM` or `HH:MM`. Seconds, suffixes and signs are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ScheduleError::MalformedTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(h) || h.len() > 2 || !all_digits(m) || m.len() != 2 {
            return Err(malformed());
        }

        let hour: u16 = h.parse().map_err(|_| malformed())?;
        let minute: u16 = m.parse().map_err(|_| malformed())?;
        Self::from_hm(hour, minute).ok_or_else(malformed)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// A weekly time slot `[start, end)` on one day.
///
/// Construction enforces `start < end`; there is no way to build a
/// malformed interval, so [`overlaps`](Self::overlaps) never has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawInterval {
    day: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = ScheduleError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.day, raw.start, raw.end)
    }
}

impl TimeInterval {
    /// Creates an interval, rejecting `start >= end`.
    pub fn new(day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::MalformedInterval {
                day: day.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { day, start, end })
    }

    /// Parses an interval from its string parts, e.g. `("Monday", "09:00", "10:00")`.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self> {
        Self::new(day.parse()?, start.parse()?, end.parse()?)
    }

    #[inline]
    pub fn day(&self) -> Weekday {
        self.day
    }

    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    #[inline]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether two intervals intersect (same day, half-open overlap).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.day, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(day: &str, start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(day, start, end).unwrap()
    }

    #[test]
    fn test_parse_time() {
        assert_eq!("09:30".parse::<TimeOfDay>().unwrap().minutes(), 570);
        assert_eq!(" 8:05 ".parse::<TimeOfDay>().unwrap().minutes(), 485);
        assert_eq!("24:00".parse::<TimeOfDay>().unwrap().minutes(), 1440);
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap().to_string(), "00:00");
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        for bad in ["", "9", "9:5", "09:60", "24:01", "25:00", "-1:00", "09:00:00", "ab:cd", "+9:00", "009:00"] {
            assert!(
                matches!(bad.parse::<TimeOfDay>(), Err(ScheduleError::MalformedTime(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("thu".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert_eq!(" SUNDAY ".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!(matches!(
            "Funday".parse::<Weekday>(),
            Err(ScheduleError::MalformedDay(_))
        ));
        assert!("Mo".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_interval_rejects_inverted_and_empty() {
        assert!(matches!(
            TimeInterval::parse("Monday", "10:00", "09:00"),
            Err(ScheduleError::MalformedInterval { .. })
        ));
        assert!(TimeInterval::parse("Monday", "10:00", "10:00").is_err());
        assert!(TimeInterval::parse("Monday", "10:00", "nope").is_err());
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let a = iv("Mon", "09:00", "10:00");
        let b = iv("Mon", "10:00", "11:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_identical_intervals_overlap() {
        let a = iv("Mon", "09:00", "10:00");
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_partial_and_nested_overlap() {
        let a = iv("Tue", "09:00", "11:00");
        assert!(a.overlaps(&iv("Tue", "10:30", "12:00")));
        assert!(a.overlaps(&iv("Tue", "09:30", "10:00")));
        assert!(!a.overlaps(&iv("Tue", "11:00", "12:00")));
    }

    #[test]
    fn test_different_days_never_overlap() {
        let a = iv("Mon", "09:00", "10:00");
        let b = iv("Tue", "09:00", "10:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_serde_roundtrip_and_rejection() {
        let a = iv("Wednesday", "13:00", "14:30");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"day":"Wednesday","start":"13:00","end":"14:30"}"#);
        let back: TimeInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);

        let bad = r#"{"day":"Wednesday","start":"15:00","end":"14:30"}"#;
        assert!(serde_json::from_str::<TimeInterval>(bad).is_err());
        let bad_time = r#"{"day":"Wednesday","start":"1pm","end":"14:30"}"#;
        assert!(serde_json::from_str::<TimeInterval>(bad_time).is_err());
    }

    fn arb_interval() -> impl Strategy<Value = TimeInterval> {
        (0usize..7, 0u16..MINUTES_PER_DAY, 1u16..240).prop_map(|(d, start, len)| {
            let end = (start + len).min(MINUTES_PER_DAY);
            TimeInterval::new(Weekday::ALL[d], TimeOfDay(start), TimeOfDay(end)).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_interval_overlaps_itself(a in arb_interval()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_different_days_never_overlap(a in arb_interval(), b in arb_interval()) {
            if a.day() != b.day() {
                prop_assert!(!a.overlaps(&b));
            }
        }

        #[test]
        fn prop_time_display_parses_back(m in 0u16..=MINUTES_PER_DAY) {
            let t = TimeOfDay(m);
            prop_assert_eq!(t.to_string().parse::<TimeOfDay>().unwrap(), t);
        }
    }
}

use chrono::{NaiveTime, Timelike};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use std::fmt;
use std::str::FromStr;

use error::InputError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with minute granularity, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    #[cfg(test)]
    pub fn new(hour: u32, minute: u32) -> Option<TimeOfDay> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0.num_seconds_from_midnight() / 60
    }
}

impl FromStr for TimeOfDay {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!("Parsing time of day {:?}", s);
        let bad_time = || InputError::BadTime {
            value: s.to_owned(),
        };

        // chrono takes single-digit fields for %H and %M; only HH:MM is valid here
        let raw = s.trim();
        if raw.len() != 5 || raw.as_bytes()[2] != b':' {
            return Err(bad_time());
        }
        NaiveTime::parse_from_str(raw, "%H:%M")
            .map(TimeOfDay)
            .map_err(|_| bad_time())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        let t: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));
        assert_eq!(t.minutes(), 545);
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn last_minute_of_day() {
        let t: TimeOfDay = "23:59".parse().unwrap();
        assert_eq!(t.minutes(), MINUTES_PER_DAY - 1);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for bad in &["24:00", "12:60", "noon", "", "9", "9:5", "9:05", "09:5", "0900", "ab:cd"] {
            assert!(bad.parse::<TimeOfDay>().is_err(), "{:?} parsed", bad);
        }
    }

    #[test]
    fn serde_uses_string_form() {
        let t = TimeOfDay::new(22, 30).unwrap();
        let json = ::serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"22:30\"");

        let back: TimeOfDay = ::serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(::serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }
}

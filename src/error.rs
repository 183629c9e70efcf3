use std::fmt;

use util::format_12h;
use window::TimeWindow;

/// Two windows that share at least one minute, as found by
/// `validator::find_overlap`.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    pub first_index: usize,
    pub second_index: usize,
    pub first: TimeWindow,
    pub second: TimeWindow,
}

impl Overlap {
    /// Both windows in 12-hour form, e.g. `9:00 AM - 10:00 AM`.
    pub fn display_times(&self) -> (String, String) {
        (display_window(&self.first), display_window(&self.second))
    }
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (first, second) = self.display_times();
        write!(f, "{} and {}", first, second)
    }
}

fn display_window(window: &TimeWindow) -> String {
    format!(
        "{} - {}",
        format_12h(window.start.minutes()),
        format_12h(window.end.minutes())
    )
}

/// Why a window or an edit to a collection of windows was rejected.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ValidationError {
    #[fail(display = "Invalid time range: {}", reason)]
    InvalidRange { reason: &'static str },
    #[fail(display = "Window is too short: {} min (at least 15 min required)", minutes)]
    TooShort { minutes: u32 },
    #[fail(display = "Windows overlap: {}", _0)]
    Overlap(Overlap),
    #[fail(display = "Limit reached: at most {} windows allowed", max)]
    LimitReached { max: usize },
    #[fail(display = "No window at index {} (have {})", index, len)]
    NoSuchWindow { index: usize, len: usize },
}

impl From<Overlap> for ValidationError {
    fn from(overlap: Overlap) -> ValidationError {
        ValidationError::Overlap(overlap)
    }
}

/// Malformed input handed to the command line driver.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum InputError {
    #[fail(display = "Invalid time {:?}, expected HH:MM", value)]
    BadTime { value: String },
    #[fail(display = "Invalid value {:?} for {}", value, key)]
    BadSetting { key: String, value: String },
    #[fail(display = "Invalid window index {:?}", value)]
    BadIndex { value: String },
    #[fail(display = "Malformed header line {:?}, expected `key: value`", line)]
    BadHeader { line: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_message_uses_12_hour_times() {
        let overlap = Overlap {
            first_index: 0,
            second_index: 1,
            first: TimeWindow::parse("09:00", "10:00").unwrap(),
            second: TimeWindow::parse("09:30", "13:15").unwrap(),
        };
        let err = ValidationError::from(overlap);
        assert_eq!(
            err.to_string(),
            "Windows overlap: 9:00 AM - 10:00 AM and 9:30 AM - 1:15 PM"
        );
    }

    #[test]
    fn too_short_message() {
        let err = ValidationError::TooShort { minutes: 10 };
        assert_eq!(
            err.to_string(),
            "Window is too short: 10 min (at least 15 min required)"
        );
    }
}

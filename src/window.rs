use chrono::Duration;

use error::InputError;
use time_of_day::{TimeOfDay, MINUTES_PER_DAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Whether a window may cross midnight, i.e. have `end` before `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub allow_overnight: bool,
}

/// Replaces one bound of an existing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEdit {
    Start(TimeOfDay),
    End(TimeOfDay),
}

impl TimeWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> TimeWindow {
        TimeWindow { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<TimeWindow, InputError> {
        Ok(TimeWindow::new(start.parse()?, end.parse()?))
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end.minutes() < self.start.minutes()
    }

    /// Length in minutes, wrapping past midnight when `end` is before `start`.
    pub fn duration_minutes(&self) -> u32 {
        let (start, end) = (self.start.minutes(), self.end.minutes());
        if end < start {
            (MINUTES_PER_DAY - start) + end
        } else {
            end - start
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes()))
    }

    pub fn with_edit(&self, edit: WindowEdit) -> TimeWindow {
        match edit {
            WindowEdit::Start(start) => TimeWindow { start, ..*self },
            WindowEdit::End(end) => TimeWindow { end, ..*self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_duration() {
        let w = TimeWindow::parse("09:00", "10:30").unwrap();
        assert!(!w.crosses_midnight());
        assert_eq!(w.duration_minutes(), 90);
        assert_eq!(w.duration(), Duration::minutes(90));
    }

    #[test]
    fn overnight_duration_wraps() {
        let w = TimeWindow::parse("22:00", "06:00").unwrap();
        assert!(w.crosses_midnight());
        assert_eq!(w.duration_minutes(), 8 * 60);
    }

    #[test]
    fn edit_replaces_one_bound() {
        let w = TimeWindow::parse("09:00", "10:00").unwrap();
        let t = TimeOfDay::new(9, 30).unwrap();

        assert_eq!(w.with_edit(WindowEdit::Start(t)).start, t);
        assert_eq!(w.with_edit(WindowEdit::Start(t)).end, w.end);
        assert_eq!(w.with_edit(WindowEdit::End(t)).end, t);
        assert_eq!(w.with_edit(WindowEdit::End(t)).start, w.start);
    }

    #[test]
    fn deserializes_from_json() {
        let w: TimeWindow =
            ::serde_json::from_str(r#"{"start": "07:15", "end": "08:00"}"#).unwrap();
        assert_eq!(w, TimeWindow::parse("07:15", "08:00").unwrap());
    }
}

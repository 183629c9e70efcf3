use super::Command;
use config::Settings;
use error::ValidationError;
use validator;
use window::{TimeWindow, WindowEdit};

/// Re-validates a collection as a whole without changing it.
#[derive(Debug, Default)]
pub struct Check;

/// Passes the collection through for display.
#[derive(Debug, Default)]
pub struct List;

#[derive(Debug)]
pub struct Add {
    pub window: TimeWindow,
}

#[derive(Debug)]
pub struct Update {
    pub index: usize,
    pub edit: WindowEdit,
}

#[derive(Debug)]
pub struct Remove {
    pub index: usize,
}

impl Command for Check {
    fn apply(
        &self,
        settings: &Settings,
        windows: &[TimeWindow],
    ) -> Result<Vec<TimeWindow>, ValidationError> {
        if windows.len() > settings.max_count {
            debug!(
                "Collection holds {} windows, limit is {}",
                windows.len(),
                settings.max_count
            );
            return Err(ValidationError::LimitReached {
                max: settings.max_count,
            });
        }
        for (idx, window) in windows.iter().enumerate() {
            trace!("Checking window {}: {:?}", idx, window);
            validator::validate(window, &settings.policy)?;
        }
        if let Some(overlap) = validator::find_overlap(windows, None) {
            return Err(overlap.into());
        }
        Ok(windows.to_vec())
    }
}

impl Command for List {
    fn apply(
        &self,
        _settings: &Settings,
        windows: &[TimeWindow],
    ) -> Result<Vec<TimeWindow>, ValidationError> {
        Ok(windows.to_vec())
    }
}

impl Command for Add {
    fn apply(
        &self,
        settings: &Settings,
        windows: &[TimeWindow],
    ) -> Result<Vec<TimeWindow>, ValidationError> {
        let updated =
            validator::add_window(windows, self.window, &settings.policy, settings.max_count)?;
        info!(
            "Added window {} - {} ({} min)",
            self.window.start,
            self.window.end,
            self.window.duration().num_minutes()
        );
        Ok(updated)
    }
}

impl Command for Update {
    fn apply(
        &self,
        settings: &Settings,
        windows: &[TimeWindow],
    ) -> Result<Vec<TimeWindow>, ValidationError> {
        let updated = validator::update_window(windows, self.index, self.edit, &settings.policy)?;
        info!("Updated window {}: {:?}", self.index, self.edit);
        Ok(updated)
    }
}

impl Command for Remove {
    fn apply(
        &self,
        _settings: &Settings,
        windows: &[TimeWindow],
    ) -> Result<Vec<TimeWindow>, ValidationError> {
        info!("Removing window {}", self.index);
        Ok(validator::remove_window(windows, self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use window::Policy;

    fn w(start: &str, end: &str) -> TimeWindow {
        TimeWindow::parse(start, end).unwrap()
    }

    fn overnight() -> Settings {
        Settings {
            policy: Policy {
                allow_overnight: true,
            },
            max_count: 3,
        }
    }

    #[test]
    fn check_accepts_a_valid_collection() {
        let windows = vec![w("07:00", "08:00"), w("21:00", "23:00")];
        assert_eq!(Check.apply(&Settings::default(), &windows), Ok(windows));
    }

    #[test]
    fn check_flags_bad_window_overlap_and_excess() {
        let settings = Settings::default();

        let short = vec![w("07:00", "07:05")];
        assert_eq!(
            Check.apply(&settings, &short),
            Err(ValidationError::TooShort { minutes: 5 })
        );

        let clashing = vec![w("07:00", "08:00"), w("07:30", "09:00")];
        match Check.apply(&settings, &clashing) {
            Err(ValidationError::Overlap(_)) => {}
            other => panic!("expected overlap, got {:?}", other),
        }

        let crowded = vec![w("01:00", "02:00"), w("03:00", "04:00"), w("05:00", "06:00")];
        assert_eq!(
            Check.apply(&overnight(), &crowded[..]).map(|v| v.len()),
            Ok(3)
        );
        let mut too_many = crowded.clone();
        too_many.push(w("07:00", "08:00"));
        assert_eq!(
            Check.apply(&overnight(), &too_many),
            Err(ValidationError::LimitReached { max: 3 })
        );
    }

    #[test]
    fn commands_go_through_the_trait_object() {
        let commands: Vec<Box<Command>> = vec![
            Box::new(Add {
                window: w("22:00", "06:00"),
            }),
            Box::new(Update {
                index: 0,
                edit: WindowEdit::End("05:30".parse().unwrap()),
            }),
            Box::new(Add {
                window: w("12:00", "12:30"),
            }),
            Box::new(Remove { index: 1 }),
        ];

        let settings = overnight();
        let mut windows = Vec::new();
        for command in &commands {
            windows = command.apply(&settings, &windows).unwrap();
        }
        assert_eq!(windows, vec![w("22:00", "05:30")]);
        assert_eq!(List.apply(&settings, &windows), Ok(windows.clone()));
    }

    #[test]
    fn overnight_window_needs_policy() {
        let add = Add {
            window: w("22:00", "06:00"),
        };
        assert!(add.apply(&Settings::default(), &[]).is_err());
        assert!(add.apply(&overnight(), &[]).is_ok());
    }
}

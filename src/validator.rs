//! Validation of active windows and of edits to a collection of them.
//!
//! Every function here is pure: collections come in borrowed and leave as a
//! fresh `Vec`, so the caller owns all state.

use error::{Overlap, ValidationError};
use window::{Policy, TimeWindow, WindowEdit};

pub const MIN_WINDOW_MINUTES: u32 = 15;

pub fn validate(window: &TimeWindow, policy: &Policy) -> Result<(), ValidationError> {
    let start = window.start.minutes();
    let end = window.end.minutes();

    if !policy.allow_overnight && end <= start {
        return Err(ValidationError::InvalidRange {
            reason: "end must be after start",
        });
    }
    if policy.allow_overnight && end == start {
        return Err(ValidationError::InvalidRange {
            reason: "start and end cannot be equal",
        });
    }

    let minutes = window.duration_minutes();
    if minutes < MIN_WINDOW_MINUTES {
        debug!("Rejecting {} - {}: {} min", window.start, window.end, minutes);
        return Err(ValidationError::TooShort { minutes });
    }

    Ok(())
}

/// Finds the first pair of windows whose literal `[start, end)` minute ranges
/// intersect, skipping `exclude` if given.
///
/// Windows are compared as same-day ranges only; a window crossing midnight
/// is not split at 00:00.
pub fn find_overlap(windows: &[TimeWindow], exclude: Option<usize>) -> Option<Overlap> {
    let included = |idx: usize| exclude != Some(idx);

    for (i, a) in windows.iter().enumerate().filter(|&(i, _)| included(i)) {
        for (j, b) in windows
            .iter()
            .enumerate()
            .skip(i + 1)
            .filter(|&(j, _)| included(j))
        {
            let (a_start, a_end) = (a.start.minutes(), a.end.minutes());
            let (b_start, b_end) = (b.start.minutes(), b.end.minutes());

            if a_start < b_end && b_start < a_end {
                trace!("Window {} ({:?}) overlaps window {} ({:?})", i, a, j, b);
                return Some(Overlap {
                    first_index: i,
                    second_index: j,
                    first: *a,
                    second: *b,
                });
            }
        }
    }

    None
}

pub fn add_window(
    windows: &[TimeWindow],
    new_window: TimeWindow,
    policy: &Policy,
    max_count: usize,
) -> Result<Vec<TimeWindow>, ValidationError> {
    if windows.len() >= max_count {
        return Err(ValidationError::LimitReached { max: max_count });
    }
    validate(&new_window, policy)?;

    let mut updated = windows.to_vec();
    updated.push(new_window);

    if let Some(overlap) = find_overlap(&updated, None) {
        return Err(rejected(overlap));
    }

    Ok(updated)
}

pub fn update_window(
    windows: &[TimeWindow],
    index: usize,
    edit: WindowEdit,
    policy: &Policy,
) -> Result<Vec<TimeWindow>, ValidationError> {
    let edited = match windows.get(index) {
        Some(window) => window.with_edit(edit),
        None => {
            return Err(ValidationError::NoSuchWindow {
                index,
                len: windows.len(),
            })
        }
    };
    validate(&edited, policy)?;

    // The pre-edit value is gone once replaced, so every remaining pair is
    // compared, the edited window included.
    let mut updated = windows.to_vec();
    updated[index] = edited;

    if let Some(overlap) = find_overlap(&updated, None) {
        return Err(rejected(overlap));
    }

    Ok(updated)
}

fn rejected(overlap: Overlap) -> ValidationError {
    debug!(
        "Rejecting edit: windows {} and {} overlap",
        overlap.first_index, overlap.second_index
    );
    overlap.into()
}

pub fn remove_window(windows: &[TimeWindow], index: usize) -> Vec<TimeWindow> {
    let mut updated = windows.to_vec();
    if index < updated.len() {
        updated.remove(index);
    } else {
        warn!(
            "Ignoring removal of window {}, collection has {}",
            index,
            windows.len()
        );
    }
    updated
}

pub mod edit;

use config::Settings;
use error::ValidationError;
use window::TimeWindow;

// Reexports
pub use self::edit::{Add, Check, List, Remove, Update};

/// One edit applied to the caller's collection of windows.
pub trait Command {
    fn apply(
        &self,
        settings: &Settings,
        windows: &[TimeWindow],
    ) -> Result<Vec<TimeWindow>, ValidationError>;
}

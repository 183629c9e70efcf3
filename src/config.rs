use std::collections::HashMap;
use std::env;

use error::InputError;
use window::Policy;

pub const ENV_ALLOW_OVERNIGHT: &'static str = "MINDFUL_BELL_ALLOW_OVERNIGHT";
pub const ENV_MAX_WINDOWS: &'static str = "MINDFUL_BELL_MAX_WINDOWS";

pub const KEY_ALLOW_OVERNIGHT: &'static str = "bell.window.allow_overnight";
pub const KEY_MAX_COUNT: &'static str = "bell.window.max_count";

pub const DEFAULT_MAX_WINDOWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub policy: Policy,
    pub max_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            policy: Policy::default(),
            max_count: DEFAULT_MAX_WINDOWS,
        }
    }
}

impl Settings {
    /// Resolves settings from the process environment, then the input header.
    pub fn resolve(header: &HashMap<String, String>) -> Result<Settings, InputError> {
        Settings::resolve_with(header, |name| env::var(name).ok())
    }

    /// Like `resolve`, with an explicit environment lookup.
    pub fn resolve_with<F>(header: &HashMap<String, String>, lookup: F) -> Result<Settings, InputError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in header.keys() {
            if key != KEY_ALLOW_OVERNIGHT && key != KEY_MAX_COUNT {
                trace!("Ignoring unknown header key '{}'", key);
            }
        }

        let mut settings = Settings::default();

        if let Some((key, raw)) = pick(&lookup, ENV_ALLOW_OVERNIGHT, header, KEY_ALLOW_OVERNIGHT) {
            settings.policy.allow_overnight = parse_bool(&raw).ok_or(InputError::BadSetting {
                key: key,
                value: raw.clone(),
            })?;
        }

        if let Some((key, raw)) = pick(&lookup, ENV_MAX_WINDOWS, header, KEY_MAX_COUNT) {
            settings.max_count = raw.trim().parse().map_err(|_| InputError::BadSetting {
                key: key,
                value: raw.clone(),
            })?;
        }

        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

/// Environment beats header; returns the winning source's name and value.
fn pick<F>(
    lookup: &F,
    env_name: &str,
    header: &HashMap<String, String>,
    header_key: &str,
) -> Option<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(env_name) {
        Some(val) => Some((env_name.to_owned(), val)),
        None => header
            .get(header_key)
            .map(|val| (header_key.to_owned(), val.to_owned())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

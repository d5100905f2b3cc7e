//! Free-form timestamp parsing.
//!
//! Three shapes are accepted, tried in this order:
//! - `h:m:s` or `m:s` with one or two digits per component (`1:23:45`, `1:23`)
//! - unit suffixes (`1h`, `2m30s`, `1h30m`)
//! - bare seconds (`90`)
//!
//! Input is lower-cased and stripped of all whitespace first, so `"1H 2M 3S"`
//! and `"1h2m3s"` are the same timestamp.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::JumpError;

/// Longest accepted input, counted after whitespace removal.
pub const MAX_INPUT_LEN: usize = 20;

lazy_static! {
    static ref COLON_RE: Regex =
        Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})(?::([0-9]{1,2}))?$").unwrap();
    static ref UNIT_RE: Regex =
        Regex::new(r"^(?:([0-9]+)h)?(?:([0-9]+)m)?(?:([0-9]+)s)?$").unwrap();
    static ref SECONDS_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Parse a user-typed timestamp into whole seconds.
///
/// Returns `None` for anything outside the grammar. Use [`try_parse_timestamp`]
/// when the reason matters.
pub fn parse_timestamp(input: &str) -> Option<u128> {
    match try_parse_timestamp(input) {
        Ok(seconds) => Some(seconds),
        Err(e) => {
            debug!(input, error = %e, "Rejected timestamp input");
            None
        }
    }
}

/// Parse a user-typed timestamp, reporting why it was rejected.
pub fn try_parse_timestamp(input: &str) -> Result<u128, JumpError> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if normalized.is_empty() {
        return Err(JumpError::EmptyInput);
    }

    let len = normalized.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(JumpError::InputTooLong {
            len,
            max: MAX_INPUT_LEN,
        });
    }

    if let Some(caps) = COLON_RE.captures(&normalized) {
        // With three groups the layout is h:m:s, otherwise m:s.
        let (h, m, s) = match caps.get(3) {
            Some(sec) => (
                Some(component(&caps[1])?),
                component(&caps[2])?,
                component(sec.as_str())?,
            ),
            None => (None, component(&caps[1])?, component(&caps[2])?),
        };
        return combine(h.unwrap_or(0), m, s);
    }

    if let Some(caps) = UNIT_RE.captures(&normalized) {
        let groups = [caps.get(1), caps.get(2), caps.get(3)];
        if groups.iter().any(Option::is_some) {
            let mut values = [0u128; 3];
            for (slot, group) in values.iter_mut().zip(groups) {
                if let Some(g) = group {
                    *slot = component(g.as_str())?;
                }
            }
            return combine(values[0], values[1], values[2]);
        }
    }

    if SECONDS_RE.is_match(&normalized) {
        return component(&normalized);
    }

    Err(JumpError::UnrecognizedFormat(normalized))
}

// Twenty digits always fit in a u128.
fn component(digits: &str) -> Result<u128, JumpError> {
    digits.parse::<u128>().map_err(|_| JumpError::Overflow)
}

fn combine(hours: u128, minutes: u128, seconds: u128) -> Result<u128, JumpError> {
    if minutes >= 60 {
        return Err(JumpError::ComponentOutOfRange {
            component: "minutes",
            value: minutes,
        });
    }
    if seconds >= 60 {
        return Err(JumpError::ComponentOutOfRange {
            component: "seconds",
            value: seconds,
        });
    }

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or(JumpError::Overflow)
}

/// Render seconds as `h:mm:ss`, or `m:ss` under an hour. Non-finite input
/// renders as `--:--`.
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--".to_string();
    }

    let total = seconds.max(0.0).floor() as u64;
    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hrs > 0 {
        format!("{}:{:02}:{:02}", hrs, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

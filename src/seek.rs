//! Tiered seek strategy.
//!
//! A seek is planned from a fresh [`PageSnapshot`] and then executed against the
//! [`VideoPage`] it came from. The first available tier handles the call:
//!
//! 1. the host's native player control, when present (authoritative, no fall-through)
//! 2. the short-form layout, when the path says so
//! 3. the best visible `<video>` element
//!
//! Failures are logged and reported through [`SeekOutcome`], never propagated.

use tracing::{debug, error, info, warn};
use url::Url;

use crate::commands::{ElementSeek, SeekPlan};
use crate::events::SeekOutcome;
use crate::models::PageSnapshot;
use crate::page::VideoPage;
use crate::resolver::resolve_with;
use crate::settings::{Settings, SETTINGS};
use crate::JumpError;

/// Coerce a requested position to a usable one: NaN, infinities and
/// negatives all become 0.
pub fn sanitize_target(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Keep a seek inside `[0, duration - epsilon]`. An unknown (NaN, infinite or
/// zero) duration leaves the target untouched.
pub fn clamp_to_duration(seconds: f64, duration: f64, epsilon: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        seconds.max(0.0).min((duration - epsilon).max(0.0))
    } else {
        seconds
    }
}

/// Copy of `location` with `param` set to `<seconds>s`, replacing the first
/// existing occurrence and dropping any others.
pub fn with_time_param(location: &Url, param: &str, seconds: f64) -> Url {
    let value = format!("{}s", seconds.floor() as u64);
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;

    for (key, existing) in location.query_pairs().into_owned() {
        if key == param {
            if !replaced {
                pairs.push((key, value.clone()));
                replaced = true;
            }
        } else {
            pairs.push((key, existing));
        }
    }
    if !replaced {
        pairs.push((param.to_string(), value));
    }

    let mut url = location.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}

fn is_short_form(location: &Url, settings: &Settings) -> bool {
    location.path().starts_with(&settings.shorts_path_prefix)
}

/// Plan a seek with the global settings.
pub fn plan_seek(snapshot: &PageSnapshot, target: f64) -> SeekPlan {
    plan_seek_with(snapshot, target, &SETTINGS)
}

/// Choose the tier for this page and work out exactly what it will do.
pub fn plan_seek_with(snapshot: &PageSnapshot, target: f64, settings: &Settings) -> SeekPlan {
    let seconds = sanitize_target(target);

    if snapshot.has_player_control {
        return SeekPlan::PlayerControl { seconds };
    }

    if is_short_form(&snapshot.location, settings) {
        let href = with_time_param(&snapshot.location, &settings.time_param, seconds).to_string();
        let element = resolve_with(snapshot, settings).map(|(index, video)| ElementSeek {
            index,
            position: seconds,
            resume: video.paused,
        });
        return SeekPlan::ShortForm { href, element };
    }

    let element = resolve_with(snapshot, settings).map(|(index, video)| {
        let position = clamp_to_duration(seconds, video.duration, settings.end_epsilon);
        if position != seconds {
            debug!(requested = seconds, position, duration = video.duration, "Clamped seek");
        }
        ElementSeek {
            index,
            position,
            resume: video.paused,
        }
    });
    SeekPlan::Element { element }
}

/// Seek the page with the global settings.
pub fn seek(page: &mut dyn VideoPage, target: f64) -> SeekOutcome {
    seek_with(page, target, &SETTINGS)
}

/// Snapshot the page, plan, and execute. Never panics or propagates; the
/// outcome says whether a seek happened.
pub fn seek_with(page: &mut dyn VideoPage, target: f64, settings: &Settings) -> SeekOutcome {
    let snapshot = page.snapshot();
    let plan = plan_seek_with(&snapshot, target, settings);
    info!(tier = %plan.tier(), position = ?plan.position(), "Seeking");
    execute(page, &plan)
}

/// Carry out a previously planned seek.
pub fn execute(page: &mut dyn VideoPage, plan: &SeekPlan) -> SeekOutcome {
    let tier = plan.tier();
    let result = match plan {
        SeekPlan::PlayerControl { seconds } => seek_player(page, *seconds),
        SeekPlan::ShortForm { href, element } => {
            // Not rolled back if the element seek below fails.
            if let Err(e) = page.replace_location(href) {
                warn!(href = %href, error = %e, "Failed to update short-form URL");
            }
            seek_element(page, *element)
        }
        SeekPlan::Element { element } => seek_element(page, *element),
    };

    match result {
        Ok(position) => SeekOutcome::Seeked { tier, position },
        Err(e) => {
            error!(tier = %tier, error = %e, "Seek failed");
            SeekOutcome::Failed {
                tier,
                reason: e.to_string(),
            }
        }
    }
}

fn seek_player(page: &mut dyn VideoPage, seconds: f64) -> Result<f64, JumpError> {
    let player = page.player_control().ok_or_else(|| {
        JumpError::PlayerControlFailed("player control disappeared before seeking".to_string())
    })?;
    player.seek_to(seconds, true).map_err(|e| match e {
        JumpError::PlayerControlFailed(_) => e,
        other => JumpError::PlayerControlFailed(other.to_string()),
    })?;
    Ok(seconds)
}

fn seek_element(page: &mut dyn VideoPage, element: Option<ElementSeek>) -> Result<f64, JumpError> {
    let element = element.ok_or(JumpError::NoVideoCandidate)?;
    page.set_current_time(element.index, element.position)?;

    if element.resume {
        // A rejected play() still leaves the position changed.
        if let Err(e) = page.play(element.index) {
            warn!(index = element.index, error = %e, "Failed to resume playback");
        }
    }

    Ok(element.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_param_replaces_first_and_drops_duplicates() {
        let url =
            Url::parse("https://www.youtube.com/shorts/abc?t=5s&feature=share&t=9s").unwrap();
        let updated = with_time_param(&url, "t", 42.9);
        assert_eq!(updated.query(), Some("t=42s&feature=share"));
    }

    #[test]
    fn time_param_appended_when_missing() {
        let url = Url::parse("https://www.youtube.com/shorts/abc").unwrap();
        let updated = with_time_param(&url, "t", 0.0);
        assert_eq!(updated.as_str(), "https://www.youtube.com/shorts/abc?t=0s");
    }

    #[test]
    fn short_form_detection_uses_path_prefix() {
        let settings = Settings::default();
        let shorts = Url::parse("https://www.youtube.com/shorts/abc").unwrap();
        let watch = Url::parse("https://www.youtube.com/watch?v=shorts").unwrap();
        assert!(is_short_form(&shorts, &settings));
        assert!(!is_short_form(&watch, &settings));
    }
}

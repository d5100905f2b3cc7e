mod commands;
pub use commands::{ElementSeek, SeekPlan, SeekTier};
mod error;
pub use error::JumpError;
mod events;
pub use events::SeekOutcome;
pub mod models;
pub use models::{
    BoundingRect, PageSnapshot, VideoCandidate, Viewport, MAIN_PLAYER_CLASS, PLAYER_ELEMENT_ID,
};
mod page;
pub use page::{MemoryPage, PlayerControl, VideoPage};
pub mod resolver;
pub use resolver::{resolve, resolve_with};
pub mod seek;
pub use seek::{
    clamp_to_duration, execute, plan_seek, plan_seek_with, sanitize_target, seek, seek_with,
};
mod settings;
pub use settings::{Settings, SETTINGS};
mod timestamp;
pub use timestamp::{format_timestamp, parse_timestamp, try_parse_timestamp, MAX_INPUT_LEN};

use tracing::{info, warn};

/// Parse `input` and seek the page to it, using the global settings.
///
/// Returns `Err` only when the input is not a timestamp. A valid timestamp
/// always yields a [`SeekOutcome`], which reports whether the page moved.
///
/// # Logging
///
/// Decisions are reported through `tracing`; install any subscriber to see them.
/// Resolver choices are `DEBUG` and each seek is `INFO`. Input rejected here is
/// `WARN` (`DEBUG` from [`parse_timestamp`]), as is a failed URL rewrite or
/// resume. A failed seek is `ERROR`.
pub fn jump(page: &mut dyn VideoPage, input: &str) -> Result<SeekOutcome, JumpError> {
    jump_with(page, input, &SETTINGS)
}

/// [`jump`] with explicit settings.
pub fn jump_with(
    page: &mut dyn VideoPage,
    input: &str,
    settings: &Settings,
) -> Result<SeekOutcome, JumpError> {
    let seconds = match try_parse_timestamp(input) {
        Ok(seconds) => seconds,
        Err(e) => {
            warn!(input, error = %e, "Invalid timestamp");
            return Err(e);
        }
    };

    info!(seconds = %seconds, formatted = %format_timestamp(seconds as f64), "Jumping");
    Ok(seek_with(page, seconds as f64, settings))
}

//! Picking the video the user is actually watching.

use tracing::{debug, trace};

use crate::models::{PageSnapshot, VideoCandidate, Viewport};
use crate::settings::{Settings, SETTINGS};

/// Whether the element is on screen with a usable size and not hidden by CSS.
pub fn is_really_visible(video: &VideoCandidate, viewport: &Viewport, settings: &Settings) -> bool {
    let r = &video.rect;
    // A zero viewport is treated as 1x1, so anything at the origin still counts.
    let vw = if viewport.width > 0.0 { viewport.width } else { 1.0 };
    let vh = if viewport.height > 0.0 { viewport.height } else { 1.0 };

    r.width > settings.min_visible_px
        && r.height > settings.min_visible_px
        && video.visibility != "hidden"
        && video.display != "none"
        && r.bottom() > 0.0
        && r.right() > 0.0
        && r.left < vw
        && r.top < vh
}

/// Loaded and really visible.
pub fn qualifies(video: &VideoCandidate, viewport: &Viewport, settings: &Settings) -> bool {
    video.is_loaded() && is_really_visible(video, viewport, settings)
}

/// Resolve the best video using the global settings.
pub fn resolve(snapshot: &PageSnapshot) -> Option<(usize, &VideoCandidate)> {
    resolve_with(snapshot, &SETTINGS)
}

/// Resolve the best video on the page, returning its DOM index.
///
/// The main player wins outright; otherwise the largest rendered area wins,
/// earliest element first on ties.
pub fn resolve_with<'a>(
    snapshot: &'a PageSnapshot,
    settings: &Settings,
) -> Option<(usize, &'a VideoCandidate)> {
    let candidates: Vec<(usize, &VideoCandidate)> = snapshot
        .videos
        .iter()
        .enumerate()
        .filter(|(_, v)| qualifies(v, &snapshot.viewport, settings))
        .collect();

    trace!(
        total = snapshot.videos.len(),
        qualifying = candidates.len(),
        "Scanned page videos"
    );

    if let Some(&(index, main)) = candidates.iter().find(|(_, v)| v.is_main_player()) {
        debug!(index, "Resolved main player video");
        return Some((index, main));
    }

    let mut best: Option<(usize, &VideoCandidate)> = None;
    for &(index, video) in &candidates {
        let larger = best.map_or(true, |(_, current)| video.rect.area() > current.rect.area());
        if larger {
            best = Some((index, video));
        }
    }

    match best {
        Some((index, video)) => {
            debug!(index, area = video.rect.area(), "Resolved largest visible video");
        }
        None => debug!("No qualifying video on the page"),
    }

    best
}

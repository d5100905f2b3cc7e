use serde::Deserialize;
use url::Url;

use crate::JumpError;

/// Class YouTube puts on the primary `<video>` element.
pub const MAIN_PLAYER_CLASS: &str = "html5-main-video";

/// Element id of YouTube's player surface exposing `seekTo`.
pub const PLAYER_ELEMENT_ID: &str = "movie_player";

// Rendered box of an element, as returned by getBoundingClientRect
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq)]
pub struct BoundingRect {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Rendered area, treating negative extents as empty.
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq)]
pub struct Viewport {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

fn default_visibility() -> String {
    "visible".to_string()
}

fn default_display() -> String {
    "block".to_string()
}

fn unknown_duration() -> f64 {
    f64::NAN
}

fn default_paused() -> bool {
    true
}

/// One `<video>` element as seen at snapshot time. Position in
/// [`PageSnapshot::videos`] is its DOM order.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoCandidate {
    /// HTMLMediaElement.readyState; anything above 0 has started loading.
    #[serde(rename = "readyState", default)]
    pub ready_state: u8,
    #[serde(default)]
    pub rect: BoundingRect,
    /// Computed `visibility` style.
    #[serde(default = "default_visibility")]
    pub visibility: String,
    /// Computed `display` style.
    #[serde(default = "default_display")]
    pub display: String,
    #[serde(rename = "classList", default)]
    pub class_list: Vec<String>,
    /// Media duration in seconds; NaN (or JSON null) while unknown.
    #[serde(default = "unknown_duration", deserialize_with = "nullable_f64")]
    pub duration: f64,
    #[serde(default = "default_paused")]
    pub paused: bool,
}

impl Default for VideoCandidate {
    fn default() -> Self {
        Self {
            ready_state: 0,
            rect: BoundingRect::default(),
            visibility: default_visibility(),
            display: default_display(),
            class_list: Vec::new(),
            duration: unknown_duration(),
            paused: default_paused(),
        }
    }
}

impl VideoCandidate {
    pub fn is_loaded(&self) -> bool {
        self.ready_state > 0
    }

    pub fn is_main_player(&self) -> bool {
        self.class_list.iter().any(|c| c == MAIN_PLAYER_CLASS)
    }

    /// Duration if the element currently reports a usable one.
    pub fn known_duration(&self) -> Option<f64> {
        if self.duration.is_finite() && self.duration > 0.0 {
            Some(self.duration)
        } else {
            None
        }
    }
}

/// Everything the resolver and seek planner read from the live page,
/// captured fresh for every seek.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSnapshot {
    pub location: Url,
    #[serde(default)]
    pub viewport: Viewport,
    /// Whether the host player surface exposes a seek function.
    #[serde(rename = "hasPlayerControl", default)]
    pub has_player_control: bool,
    #[serde(default)]
    pub videos: Vec<VideoCandidate>,
}

impl PageSnapshot {
    pub fn new(location: Url, viewport: Viewport) -> Self {
        Self {
            location,
            viewport,
            has_player_control: false,
            videos: Vec::new(),
        }
    }

    /// Decode a snapshot posted by a page script.
    pub fn from_json(raw: &str) -> Result<Self, JumpError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

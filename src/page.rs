//! The boundary between the seek logic and a live page.
//!
//! A host (browser glue, a test, the demo) implements [`VideoPage`]. The seek
//! strategy only reads through [`VideoPage::snapshot`] and writes through the
//! remaining methods, addressing videos by their index in the snapshot.

use url::Url;

use crate::models::{PageSnapshot, VideoCandidate, Viewport};
use crate::JumpError;

/// Host player surface with a native seek-by-time function.
pub trait PlayerControl {
    /// Seek to `seconds`. `allow_seek_ahead` lets the player fetch unbuffered data.
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) -> Result<(), JumpError>;
}

/// Read and write access to the current document.
pub trait VideoPage {
    /// Capture the current state of the page.
    fn snapshot(&self) -> PageSnapshot;

    /// The native player control, if the page exposes one.
    fn player_control(&mut self) -> Option<&mut dyn PlayerControl>;

    /// Replace the current history entry's URL without navigating.
    fn replace_location(&mut self, href: &str) -> Result<(), JumpError>;

    /// Set `currentTime` on the video at `index`.
    fn set_current_time(&mut self, index: usize, seconds: f64) -> Result<(), JumpError>;

    /// Resume playback of the video at `index`.
    fn play(&mut self, index: usize) -> Result<(), JumpError>;
}

/// An in-memory page. Writes are applied to its own state, so a later
/// snapshot sees them.
pub struct MemoryPage {
    location: Url,
    viewport: Viewport,
    videos: Vec<VideoCandidate>,
    player: Option<Box<dyn PlayerControl>>,
    current_times: Vec<Option<f64>>,
    history: Vec<String>,
}

impl MemoryPage {
    pub fn new(href: &str, viewport: Viewport) -> Result<Self, JumpError> {
        Ok(Self {
            location: Url::parse(href)?,
            viewport,
            videos: Vec::new(),
            player: None,
            current_times: Vec::new(),
            history: Vec::new(),
        })
    }

    /// Build a page from a decoded snapshot. The player control, if the
    /// snapshot advertises one, has to be attached with [`MemoryPage::with_player`].
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        let current_times = vec![None; snapshot.videos.len()];
        Self {
            location: snapshot.location,
            viewport: snapshot.viewport,
            videos: snapshot.videos,
            player: None,
            current_times,
            history: Vec::new(),
        }
    }

    pub fn with_video(mut self, video: VideoCandidate) -> Self {
        self.videos.push(video);
        self.current_times.push(None);
        self
    }

    pub fn with_player<P>(mut self, player: P) -> Self
    where
        P: PlayerControl + 'static,
    {
        self.player = Some(Box::new(player));
        self
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    /// URLs written through [`VideoPage::replace_location`], oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn video(&self, index: usize) -> Option<&VideoCandidate> {
        self.videos.get(index)
    }

    /// Last position written to the video at `index`.
    pub fn current_time(&self, index: usize) -> Option<f64> {
        self.current_times.get(index).copied().flatten()
    }

    fn video_mut(&mut self, index: usize) -> Result<&mut VideoCandidate, JumpError> {
        self.videos
            .get_mut(index)
            .ok_or_else(|| JumpError::ElementRejected(format!("no video at index {}", index)))
    }
}

impl VideoPage for MemoryPage {
    fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            location: self.location.clone(),
            viewport: self.viewport,
            has_player_control: self.player.is_some(),
            videos: self.videos.clone(),
        }
    }

    fn player_control(&mut self) -> Option<&mut dyn PlayerControl> {
        match self.player.as_mut() {
            Some(player) => Some(&mut **player),
            None => None,
        }
    }

    fn replace_location(&mut self, href: &str) -> Result<(), JumpError> {
        let next = Url::parse(href)?;
        // history.replaceState refuses to change origin
        if next.origin() != self.location.origin() {
            return Err(JumpError::LocationRejected(format!(
                "cross-origin replacement to {}",
                next.origin().ascii_serialization()
            )));
        }
        self.location = next;
        self.history.push(href.to_string());
        Ok(())
    }

    fn set_current_time(&mut self, index: usize, seconds: f64) -> Result<(), JumpError> {
        if !seconds.is_finite() {
            return Err(JumpError::ElementRejected(format!(
                "non-finite currentTime {}",
                seconds
            )));
        }
        self.video_mut(index)?;
        self.current_times[index] = Some(seconds);
        Ok(())
    }

    fn play(&mut self, index: usize) -> Result<(), JumpError> {
        self.video_mut(index)?.paused = false;
        Ok(())
    }
}

impl std::fmt::Debug for MemoryPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPage")
            .field("location", &self.location.as_str())
            .field("videos", &self.videos.len())
            .field("has_player_control", &self.player.is_some())
            .finish()
    }
}

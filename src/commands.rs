// Seek mechanisms, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekTier {
    /// The host page's own player surface (`movie_player.seekTo`)
    PlayerControl,
    /// Short-form layout: rewrite the time parameter, then seek the element
    ShortForm,
    /// Seek the best visible `<video>` element directly
    Element,
}

impl SeekTier {
    pub fn name(self) -> &'static str {
        match self {
            SeekTier::PlayerControl => "playerControl",
            SeekTier::ShortForm => "shortForm",
            SeekTier::Element => "element",
        }
    }
}

impl std::fmt::Display for SeekTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A seek on one `<video>` element, addressed by DOM index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSeek {
    pub index: usize,
    pub position: f64,
    /// The element was paused and should be resumed after seeking.
    pub resume: bool,
}

// Concrete plan produced from a page snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum SeekPlan {
    PlayerControl {
        seconds: f64,
    },
    ShortForm {
        /// Rewritten page URL carrying the elapsed time.
        href: String,
        element: Option<ElementSeek>,
    },
    Element {
        element: Option<ElementSeek>,
    },
}

impl SeekPlan {
    pub fn tier(&self) -> SeekTier {
        match self {
            SeekPlan::PlayerControl { .. } => SeekTier::PlayerControl,
            SeekPlan::ShortForm { .. } => SeekTier::ShortForm,
            SeekPlan::Element { .. } => SeekTier::Element,
        }
    }

    /// Position the plan will seek to, if it found anything to seek.
    pub fn position(&self) -> Option<f64> {
        match self {
            SeekPlan::PlayerControl { seconds } => Some(*seconds),
            SeekPlan::ShortForm { element, .. } | SeekPlan::Element { element } => {
                element.map(|e| e.position)
            }
        }
    }
}

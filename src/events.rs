use crate::commands::SeekTier;

// Result of a single seek call
#[derive(Debug, Clone, PartialEq)]
pub enum SeekOutcome {
    Seeked { tier: SeekTier, position: f64 },
    Failed { tier: SeekTier, reason: String },
}

impl SeekOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, SeekOutcome::Seeked { .. })
    }

    /// The tier that handled (or failed) the seek.
    pub fn tier(&self) -> SeekTier {
        match self {
            SeekOutcome::Seeked { tier, .. } | SeekOutcome::Failed { tier, .. } => *tier,
        }
    }

    pub fn position(&self) -> Option<f64> {
        match self {
            SeekOutcome::Seeked { position, .. } => Some(*position),
            SeekOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SeekOutcome::Failed { reason, .. } => Some(reason),
            SeekOutcome::Seeked { .. } => None,
        }
    }
}

impl From<SeekOutcome> for bool {
    fn from(outcome: SeekOutcome) -> bool {
        outcome.succeeded()
    }
}

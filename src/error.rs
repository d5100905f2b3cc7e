use thiserror::Error;

// Basic error handling with thiserror
#[derive(Error, Debug)]
pub enum JumpError {
    #[error("Timestamp input is empty")]
    EmptyInput,

    #[error("Timestamp input too long ({len} chars, max {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("Unrecognized timestamp format: {0}")]
    UnrecognizedFormat(String),

    #[error("Timestamp {component} component out of range: {value}")]
    ComponentOutOfRange { component: &'static str, value: u128 },

    #[error("Timestamp value overflowed")]
    Overflow,

    #[error("No visible, loaded video element on the page")]
    NoVideoCandidate,

    #[error("Player control seek failed: {0}")]
    PlayerControlFailed(String),

    #[error("Video element rejected the seek: {0}")]
    ElementRejected(String),

    #[error("Page location update rejected: {0}")]
    LocationRejected(String),

    #[error("Invalid page location: {0}")]
    InvalidLocation(#[from] url::ParseError),

    #[error("Snapshot decoding failed: {0}")]
    SnapshotDecodeFailed(#[from] serde_json::Error),
}

impl JumpError {
    /// True when the user input did not match the timestamp grammar.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            JumpError::EmptyInput
                | JumpError::InputTooLong { .. }
                | JumpError::UnrecognizedFormat(_)
                | JumpError::ComponentOutOfRange { .. }
                | JumpError::Overflow
        )
    }

    /// True when the input was fine but the page could not be seeked.
    pub fn is_seek_failure(&self) -> bool {
        matches!(
            self,
            JumpError::NoVideoCandidate
                | JumpError::PlayerControlFailed(_)
                | JumpError::ElementRejected(_)
                | JumpError::LocationRejected(_)
                | JumpError::InvalidLocation(_)
        )
    }
}

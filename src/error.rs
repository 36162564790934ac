use thiserror::Error;

/// Errors surfaced by the swarm core.
///
/// The formation math itself is total; errors only arise at the edges where
/// tracker samples, UI strings or parameters enter the engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwarmError {
    #[error("hand sample has {found} landmarks, need at least {required}")]
    TooFewLandmarks { found: usize, required: usize },

    #[error("unknown gesture name: {0:?}")]
    UnknownGesture(String),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SwarmError>;

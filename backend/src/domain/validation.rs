use thiserror::Error;

/// Input a service refuses to act on
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Feed interval must be at least one minute")]
    ZeroFeedInterval,

    #[error("Log id cannot be empty")]
    EmptyId,
}

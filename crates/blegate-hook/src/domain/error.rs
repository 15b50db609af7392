use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid environment factor {0}: must be positive and finite")]
    InvalidEnvironmentFactor(f64),
}

/// Outcome of decoding the outer gateway envelope for one publish event.
///
/// Both variants resolve to a pass-through decision; neither is ever
/// surfaced to the broker as a hook failure.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The topic is outside the configured gateway prefix. The message is
    /// simply not ours to inspect.
    #[error("topic does not match the gateway prefix")]
    NotApplicable,

    #[error("malformed gateway envelope: {0}")]
    Malformed(String),
}

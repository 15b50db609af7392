use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid environment factor {0}: must be positive and finite")]
    InvalidEnvironmentFactor(f64),
}

pub type Result<T> = std::result::Result<T, PayloadError>;

use thiserror::Error;

/// Problems with a card content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse card content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("card content has no timeline entries")]
    EmptyTimeline,
    #[error("timeline entry {index}: {field} must not be empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("evasion bound must be positive and finite (got {0})")]
    InvalidEvasionBound(f32),
}

//! Free-text fallback for messages no rule understands

use thiserror::Error;

/// Failure of the fallback generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    #[error("fallback generator is not configured")]
    Unavailable,

    #[error("fallback generation failed: {0}")]
    Generation(String),
}

/// A text-to-text model consulted when no intent matches
pub trait FallbackGenerator: std::fmt::Debug {
    /// Produce a reply for `text`
    fn generate(&self, text: &str) -> Result<String, FallbackError>;
}

/// Generator used when no text model is deployed; always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableFallback;

impl FallbackGenerator for UnavailableFallback {
    fn generate(&self, _text: &str) -> Result<String, FallbackError> {
        Err(FallbackError::Unavailable)
    }
}

/// Generator that always replies with the same text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFallback {
    reply: String,
}

impl StaticFallback {
    /// Create a generator replying with `reply`
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl FallbackGenerator for StaticFallback {
    fn generate(&self, _text: &str) -> Result<String, FallbackError> {
        Ok(self.reply.clone())
    }
}

//! Error types.

use std::any::Any;

use thiserror::Error;

/// A panic caught while running an effect.
///
/// # Examples
///
/// ```rust
/// use kindred::error::Panicked;
///
/// let error = Panicked::new("boom");
/// assert_eq!(error.to_string(), "effect panicked: boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("effect panicked: {message}")]
pub struct Panicked {
    /// The panic message, or `"unknown panic"` for non-string payloads.
    pub message: String,
}

impl Panicked {
    /// A `Panicked` carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reads the message out of a payload returned by `catch_unwind`.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::new(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(message.clone())
        } else {
            Self::new("unknown panic")
        }
    }
}

use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
};
use thiserror::Error;

/// Failure raised while producing or transforming a value.
///
/// Never escapes a subscription: its `Display` text becomes the message of an
/// [`Event::Error`](crate::Event::Error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("{operator} panicked: {message}")]
    Panicked {
        operator: &'static str,
        message: String,
    },
    #[error("{0}")]
    Rejected(String),
}

impl Failure {
    pub fn panicked(operator: &'static str, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };

        Self::Panicked { operator, message }
    }

    pub fn rejected(error: impl std::fmt::Display) -> Self {
        Self::Rejected(error.to_string())
    }
}

/// Runs `f`, turning a panic into [`Failure::Panicked`] attributed to `operator`.
pub fn catch_panic<R>(operator: &'static str, f: impl FnOnce() -> R) -> Result<R, Failure> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| Failure::panicked(operator, payload))
}

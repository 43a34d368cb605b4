use std::fmt::{Debug, Display};

/// A single notification pushed through a subscription.
///
/// `Completed` and `Error` are terminal: a well-behaved producer sends at most
/// one of them and nothing afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event<T> {
    Next(T),
    Completed,
    Error(String),
}

impl<T> Event<T> {
    pub fn failure(error: impl Display) -> Self {
        Self::Error(error.to_string())
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Next(_))
    }

    pub fn map<U>(self, mapping: impl FnOnce(T) -> U) -> Event<U> {
        match self {
            Self::Next(value) => Event::Next(mapping(value)),
            Self::Completed => Event::Completed,
            Self::Error(message) => Event::Error(message),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Next(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Debug> Display for Event<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Next(value) => write!(f, "next({:?})", value),
            Self::Completed => f.write_str("completed"),
            Self::Error(message) => write!(f, "error({:?})", message),
        }
    }
}

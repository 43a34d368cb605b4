mod predicate;
mod relay;

pub mod extension;

pub use extension::{Filter, Map, ObservableExtensions, TryFilter, TryMap};
pub use predicate::Predicate;

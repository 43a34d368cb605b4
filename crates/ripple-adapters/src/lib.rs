//! Bridges from callback-driven producers into [`ripple_core::Observable`].
//!
//! [`from_future`] covers one-shot requests that settle once (an HTTP call, a
//! file read). [`Emitter`] covers open-ended event sources that keep firing
//! until the program stops listening (button taps, key presses).

mod emitter;
mod future;

pub mod task_spawner;

pub use emitter::Emitter;
pub use future::from_future;
pub use task_spawner::{TaskSpawner, ThreadSpawner};
#[cfg(feature = "tokio")]
pub use task_spawner::TokioSpawner;

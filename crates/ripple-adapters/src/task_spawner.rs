pub mod thread_spawner;
#[cfg(feature = "tokio")]
pub mod tokio_spawner;

use std::future::Future;

pub use thread_spawner::ThreadSpawner;
#[cfg(feature = "tokio")]
pub use tokio_spawner::TokioSpawner;

/// Runs a detached task to completion somewhere other than the caller.
pub trait TaskSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: 'static + Send + Future<Output = ()>;
}

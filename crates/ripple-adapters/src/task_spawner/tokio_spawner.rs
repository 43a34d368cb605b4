use super::TaskSpawner;
use std::future::Future;
use tokio::runtime::{Handle, TryCurrentError};

/// Spawns tasks onto a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: Handle,
}

impl TokioSpawner {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is currently running on.
    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl TaskSpawner for TokioSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: 'static + Send + Future<Output = ()>,
    {
        // detached; the task reports through its subscriber
        drop(self.handle.spawn(task));
    }
}

use super::TaskSpawner;
use std::future::Future;

/// Spawns every task on its own OS thread and drives it with `pollster`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSpawner;

impl TaskSpawner for ThreadSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: 'static + Send + Future<Output = ()>,
    {
        let handle = std::thread::spawn(move || pollster::block_on(task));
        tracing::trace!(thread = ?handle.thread().id(), "spawned task thread");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{sync::mpsc, time::Duration};

    #[test]
    fn runs_task_off_the_calling_thread() {
        let (sender, receiver) = mpsc::channel();
        let caller = std::thread::current().id();

        ThreadSpawner.spawn(async move {
            let _ = sender.send(std::thread::current().id());
        });

        let runner = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_ne!(runner, caller);
    }
}

use crate::{Event, IObserver};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An observer that keeps every event it receives.
///
/// Clones share the same log, so one clone can be handed to `subscribe` while
/// another is kept to inspect what arrived.
#[derive(Debug)]
pub struct Recorder<T> {
    events: Arc<Mutex<Vec<Event<T>>>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn is_terminated(&self) -> bool {
        self.lock().last().is_some_and(Event::is_terminal)
    }

    pub fn take(&self) -> Vec<Event<T>> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event<T>>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Recorder<T> {
    pub fn events(&self) -> Vec<Event<T>> {
        self.lock().clone()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IObserver<T> for Recorder<T> {
    fn notify(&mut self, event: Event<T>) {
        self.lock().push(event);
    }
}

use crate::{Event, IObserver};
use std::fmt::Display;

/// The observer handed to a subscription routine.
///
/// Wraps the caller's observer and enforces the termination contract: once a
/// terminal event has passed through, everything else is dropped.
pub struct Subscriber<T> {
    observer: Box<dyn IObserver<T> + Send>,
    terminated: bool,
}

impl<T> Subscriber<T> {
    pub fn new<O: IObserver<T> + Send + 'static>(observer: O) -> Self {
        Self {
            observer: Box::new(observer),
            terminated: false,
        }
    }

    pub fn next(&mut self, value: T) {
        self.notify(Event::Next(value));
    }

    pub fn complete(&mut self) {
        self.notify(Event::Completed);
    }

    pub fn error(&mut self, error: impl Display) {
        self.notify(Event::failure(error));
    }
}

impl<T> IObserver<T> for Subscriber<T> {
    fn notify(&mut self, event: Event<T>) {
        if self.terminated {
            tracing::trace!(
                terminal = event.is_terminal(),
                "dropping event delivered after termination"
            );
            return;
        }

        self.terminated = event.is_terminal();
        self.observer.notify(event);
    }

    fn is_closed(&self) -> bool {
        self.terminated || self.observer.is_closed()
    }
}

impl<T> std::fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

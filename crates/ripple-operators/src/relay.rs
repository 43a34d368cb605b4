use ripple_core::{Event, Failure, IObserver};

/// Downstream half of an operator's forwarding observer.
///
/// Closes on the first terminal event it forwards and drops everything after.
pub(crate) struct Relay<O> {
    observer: O,
    closed: bool,
}

impl<O> Relay<O> {
    pub(crate) fn new(observer: O) -> Self {
        Self {
            observer,
            closed: false,
        }
    }

    pub(crate) fn emit<U>(&mut self, event: Event<U>)
    where
        O: IObserver<U>,
    {
        if self.closed {
            return;
        }

        self.closed = event.is_terminal();
        self.observer.notify(event);
    }

    pub(crate) fn fail<U>(&mut self, failure: Failure)
    where
        O: IObserver<U>,
    {
        if self.closed {
            return;
        }

        tracing::debug!(%failure, "operator failed, terminating subscription");
        self.emit(Event::<U>::failure(failure));
    }

    pub(crate) fn is_closed<U>(&self) -> bool
    where
        O: IObserver<U>,
    {
        self.closed || self.observer.is_closed()
    }
}

use crate::relay::Relay;
use ripple_core::{catch_panic, Event, Failure, IObservable, IObserver};
use std::{fmt::Display, marker::PhantomData, sync::Arc};

pub struct TryFilter<T, O: IObservable<T>, E: Display, F: Fn(&T) -> Result<bool, E>> {
    observable: O,
    predicate: Arc<F>,
    marker: PhantomData<fn(T) -> E>,
}

impl<T, O: IObservable<T>, E: Display, F: Fn(&T) -> Result<bool, E>> TryFilter<T, O, E, F> {
    pub(super) fn new(observable: O, predicate: F) -> Self {
        Self {
            observable,
            predicate: Arc::new(predicate),
            marker: PhantomData,
        }
    }
}

pub struct Observer<T, O, E, F: Fn(&T) -> Result<bool, E>> {
    relay: Relay<O>,
    predicate: Arc<F>,
    marker: PhantomData<fn(T) -> E>,
}

impl<T, O, E, F> IObserver<T> for Observer<T, O, E, F>
where
    O: IObserver<T>,
    E: Display,
    F: Fn(&T) -> Result<bool, E>,
{
    fn notify(&mut self, event: Event<T>) {
        if self.relay.is_closed::<T>() {
            return;
        }

        match event {
            Event::Next(item) => match catch_panic("try_filter", || (self.predicate)(&item)) {
                Ok(Ok(true)) => self.relay.emit(Event::Next(item)),
                Ok(Ok(false)) => {}
                Ok(Err(e)) => self.relay.fail::<T>(Failure::rejected(e)),
                Err(failure) => self.relay.fail::<T>(failure),
            },
            terminal => self.relay.emit(terminal),
        }
    }

    fn is_closed(&self) -> bool {
        self.relay.is_closed::<T>()
    }
}

impl<T, O, E, F> IObservable<T> for TryFilter<T, O, E, F>
where
    T: 'static,
    E: Display + 'static,
    O: IObservable<T>,
    F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
{
    fn subscribe<U: IObserver<T> + Send + 'static>(&self, observer: U) {
        let o = Observer {
            relay: Relay::new(observer),
            predicate: Arc::clone(&self.predicate),
            marker: PhantomData,
        };
        self.observable.subscribe(o);
    }
}

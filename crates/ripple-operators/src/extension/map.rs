use crate::relay::Relay;
use ripple_core::{catch_panic, Event, IObservable, IObserver};
use std::{marker::PhantomData, sync::Arc};

pub struct Map<T, O: IObservable<T>, U, F: Fn(T) -> U> {
    observable: O,
    mapping: Arc<F>,
    marker: PhantomData<fn(T) -> U>,
}

impl<T, O: IObservable<T>, U, F: Fn(T) -> U> Map<T, O, U, F> {
    pub(super) fn new(observable: O, mapping: F) -> Self {
        Self {
            observable,
            mapping: Arc::new(mapping),
            marker: PhantomData,
        }
    }
}

impl<T, O: IObservable<T> + Clone, U, F: Fn(T) -> U> Clone for Map<T, O, U, F> {
    fn clone(&self) -> Self {
        Self {
            observable: self.observable.clone(),
            mapping: Arc::clone(&self.mapping),
            marker: PhantomData,
        }
    }
}

pub struct Observer<T, O, U, F: Fn(T) -> U> {
    relay: Relay<O>,
    mapping: Arc<F>,
    marker: PhantomData<fn(T) -> U>,
}

impl<T, O: IObserver<U>, U, F: Fn(T) -> U> IObserver<T> for Observer<T, O, U, F> {
    fn notify(&mut self, event: Event<T>) {
        if self.relay.is_closed::<U>() {
            return;
        }

        match event {
            Event::Next(item) => match catch_panic("map", || (self.mapping)(item)) {
                Ok(value) => self.relay.emit(Event::Next(value)),
                Err(failure) => self.relay.fail::<U>(failure),
            },
            Event::Completed => self.relay.emit(Event::<U>::Completed),
            Event::Error(message) => self.relay.emit(Event::<U>::Error(message)),
        }
    }

    fn is_closed(&self) -> bool {
        self.relay.is_closed::<U>()
    }
}

impl<T, O, U, F> IObservable<U> for Map<T, O, U, F>
where
    T: 'static,
    U: 'static,
    O: IObservable<T>,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    fn subscribe<D: IObserver<U> + Send + 'static>(&self, observer: D) {
        let o = Observer {
            relay: Relay::new(observer),
            mapping: Arc::clone(&self.mapping),
            marker: PhantomData,
        };
        self.observable.subscribe(o);
    }
}

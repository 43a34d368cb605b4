use crate::{relay::Relay, Predicate};
use ripple_core::{catch_panic, Event, IObservable, IObserver};
use std::{marker::PhantomData, sync::Arc};

pub struct Filter<T, O: IObservable<T>, P: Predicate<T>> {
    observable: O,
    predicate: Arc<P>,
    marker: PhantomData<fn(T)>,
}

impl<T, O: IObservable<T>, P: Predicate<T>> Filter<T, O, P> {
    pub(super) fn new(observable: O, predicate: P) -> Self {
        Self {
            observable,
            predicate: Arc::new(predicate),
            marker: PhantomData,
        }
    }
}

impl<T, O: IObservable<T> + Clone, P: Predicate<T>> Clone for Filter<T, O, P> {
    fn clone(&self) -> Self {
        Self {
            observable: self.observable.clone(),
            predicate: Arc::clone(&self.predicate),
            marker: PhantomData,
        }
    }
}

pub struct Observer<T, O: IObserver<T>, P: Predicate<T>> {
    relay: Relay<O>,
    predicate: Arc<P>,
    marker: PhantomData<fn(T)>,
}

impl<T, O: IObserver<T>, P: Predicate<T>> IObserver<T> for Observer<T, O, P> {
    fn notify(&mut self, event: Event<T>) {
        if self.relay.is_closed::<T>() {
            return;
        }

        match event {
            Event::Next(item) => match catch_panic("filter", || self.predicate.test(&item)) {
                Ok(true) => self.relay.emit(Event::Next(item)),
                Ok(false) => {}
                Err(failure) => self.relay.fail::<T>(failure),
            },
            terminal => self.relay.emit(terminal),
        }
    }

    fn is_closed(&self) -> bool {
        self.relay.is_closed::<T>()
    }
}

impl<T, O, P> IObservable<T> for Filter<T, O, P>
where
    T: 'static,
    O: IObservable<T>,
    P: Predicate<T> + Send + Sync + 'static,
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

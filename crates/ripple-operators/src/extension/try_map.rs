use crate::relay::Relay;
use ripple_core::{catch_panic, Event, Failure, IObservable, IObserver};
use std::{fmt::Display, marker::PhantomData, sync::Arc};

/// Like [`Map`](super::Map), but the mapping reports failure through `Err`.
///
/// The first `Err` terminates the subscription with its `Display` text.
pub struct TryMap<T, O: IObservable<T>, U, E: Display, F: Fn(T) -> Result<U, E>> {
    observable: O,
    mapping: Arc<F>,
    marker: PhantomData<fn(T) -> Result<U, E>>,
}

impl<T, O: IObservable<T>, U, E: Display, F: Fn(T) -> Result<U, E>> TryMap<T, O, U, E, F> {
    pub(super) fn new(observable: O, mapping: F) -> Self {
        Self {
            observable,
            mapping: Arc::new(mapping),
            marker: PhantomData,
        }
    }
}

pub struct Observer<T, O, U, E, F: Fn(T) -> Result<U, E>> {
    relay: Relay<O>,
    mapping: Arc<F>,
    marker: PhantomData<fn(T) -> Result<U, E>>,
}

impl<T, O, U, E, F> IObserver<T> for Observer<T, O, U, E, F>
where
    O: IObserver<U>,
    E: Display,
    F: Fn(T) -> Result<U, E>,
{
    fn notify(&mut self, event: Event<T>) {
        if self.relay.is_closed::<U>() {
            return;
        }

        match event {
            Event::Next(item) => match catch_panic("try_map", || (self.mapping)(item)) {
                Ok(Ok(value)) => self.relay.emit(Event::Next(value)),
                Ok(Err(e)) => self.relay.fail::<U>(Failure::rejected(e)),
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

impl<T, O, U, E, F> IObservable<U> for TryMap<T, O, U, E, F>
where
    T: 'static,
    U: 'static,
    E: Display + 'static,
    O: IObservable<T>,
    F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
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

#[cfg(test)]
mod test {
    use crate::ObservableExtensions;
    use ripple_core::{Event, IObservable, Observable, Recorder};

    #[test]
    fn err_terminates_with_its_message() {
        let source = Observable::from_sequence(["1", "2", "x", "4"]).try_map(str::parse::<i32>);
        let recorder = Recorder::new();
        source.subscribe(recorder.clone());

        assert_eq!(
            recorder.events(),
            vec![
                Event::Next(1),
                Event::Next(2),
                Event::Error("invalid digit found in string".to_string())
            ]
        );
    }

    #[test]
    fn all_ok_completes() {
        let source = Observable::from_sequence(["10", "20"]).try_map(str::parse::<u8>);
        let recorder = Recorder::new();
        source.subscribe(recorder.clone());

        assert_eq!(
            recorder.events(),
            vec![Event::Next(10), Event::Next(20), Event::Completed]
        );
    }

    #[test]
    fn panic_is_attributed_to_try_map() {
        let source = Observable::from_sequence([0_u32])
            .try_map(|n: u32| -> Result<u32, String> { Ok(10 / n) });
        let recorder = Recorder::new();
        source.subscribe(recorder.clone());

        assert_eq!(
            recorder.events(),
            vec![Event::Error(
                "try_map panicked: attempt to divide by zero".to_string()
            )]
        );
    }
}

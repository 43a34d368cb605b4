use ripple_core::{IObserver, Observable, Subscriber};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listeners<T> = Mutex<Vec<Subscriber<T>>>;

/// A push source for externally triggered events, such as taps on a widget.
///
/// Each subscription to [`Emitter::observable`] registers a listener that
/// receives `next(value)` for every later [`Emitter::emit`]. The stream is
/// unbounded: listeners never see `completed` or `error`. Listeners whose
/// chain has closed are dropped on the next emission.
///
/// Emissions hold the listener lock while notifying, so an observer must not
/// call back into the emitter it is listening to.
#[derive(Debug)]
pub struct Emitter<T> {
    listeners: Arc<Listeners<T>>,
}

impl<T: Clone + Send + 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscriptions made after the emitter is dropped never receive anything.
    pub fn observable(&self) -> Observable<T> {
        let listeners = Arc::downgrade(&self.listeners);
        Observable::from_handler(move |subscriber| register(&listeners, subscriber))
    }

    pub fn emit(&self, value: T) {
        let mut listeners = lock(&self.listeners);
        for listener in listeners.iter_mut() {
            listener.next(value.clone());
        }

        let before = listeners.len();
        listeners.retain(|listener| !listener.is_closed());
        if listeners.len() != before {
            tracing::trace!(pruned = before - listeners.len(), "dropped closed listeners");
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }
}

impl Emitter<()> {
    pub fn tap(&self) {
        self.emit(())
    }
}

impl<T: Clone + Send + 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

fn register<T>(listeners: &Weak<Listeners<T>>, subscriber: Subscriber<T>) {
    let Some(listeners) = listeners.upgrade() else {
        tracing::trace!("emitter is gone; listener will never be notified");
        return;
    };

    lock(&listeners).push(subscriber);
}

fn lock<T>(listeners: &Listeners<T>) -> MutexGuard<'_, Vec<Subscriber<T>>> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod test {
    use super::*;
    use ripple_core::{Event, IObservable, Recorder};
    use ripple_operators::ObservableExtensions;

    #[test]
    fn taps_reach_every_listener_and_never_terminate() {
        let taps = Emitter::<()>::new();
        let first = Recorder::new();
        let second = Recorder::new();

        taps.observable().subscribe(first.clone());
        taps.tap();
        taps.observable().subscribe(second.clone());
        taps.tap();
        taps.tap();

        assert_eq!(first.events(), vec![Event::Next(()); 3]);
        assert_eq!(second.events(), vec![Event::Next(()); 2]);
        assert!(!first.is_terminated());
    }

    #[test]
    fn nothing_happens_before_subscribe() {
        let clicks = Emitter::<()>::new();
        let counter = clicks.observable().map(|_: ()| 1);

        clicks.tap();
        assert_eq!(clicks.listener_count(), 0);

        let recorder = Recorder::new();
        counter.subscribe(recorder.clone());
        clicks.tap();

        assert_eq!(recorder.events(), vec![Event::Next(1)]);
    }

    #[test]
    fn closed_chains_are_pruned() {
        let values = Emitter::<i32>::new();
        let recorder = Recorder::new();
        values
            .observable()
            .try_map(|n: i32| if n < 0 { Err("negative") } else { Ok(n) })
            .subscribe(recorder.clone());
        values.observable().subscribe(|_: Event<i32>| {});
        assert_eq!(values.listener_count(), 2);

        values.emit(4);
        values.emit(-1);
        values.emit(5);

        assert_eq!(
            recorder.events(),
            vec![Event::Next(4), Event::Error("negative".to_string())]
        );
        assert_eq!(values.listener_count(), 1);
    }

    #[test]
    fn subscribing_after_drop_is_silent() {
        let emitter = Emitter::<u8>::new();
        let source = emitter.observable();
        drop(emitter);

        let recorder = Recorder::new();
        source.subscribe(recorder.clone());
        assert!(recorder.is_empty());
    }

    #[test]
    fn emissions_from_other_threads_arrive_in_order() {
        let emitter = Emitter::<i32>::new();
        let recorder = Recorder::new();
        emitter.observable().subscribe(recorder.clone());

        let handle = std::thread::spawn({
            let emitter = emitter.clone();
            move || {
                for n in 0..100 {
                    emitter.emit(n);
                }
            }
        });
        handle.join().unwrap();

        let values: Vec<i32> = recorder.take().into_iter().filter_map(Event::into_value).collect();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }
}

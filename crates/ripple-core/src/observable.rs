use crate::{IObserver, Subscriber};
use std::{fmt::Display, sync::Arc};

pub trait IObservable<T> {
    /// Starts a new subscription session delivering events to `observer`.
    ///
    /// Each call is independent; nothing produced for one session is shared
    /// with another.
    fn subscribe<O: IObserver<T> + Send + 'static>(&self, observer: O);
}

impl<T, S: IObservable<T> + ?Sized> IObservable<T> for &S {
    fn subscribe<O: IObserver<T> + Send + 'static>(&self, observer: O) {
        S::subscribe(self, observer)
    }
}

type Routine<T> = dyn Fn(Subscriber<T>) + Send + Sync;

/// A cold source defined by a single subscription routine.
pub struct Observable<T> {
    routine: Arc<Routine<T>>,
}

impl<T> Observable<T> {
    pub fn from_handler<F>(routine: F) -> Self
    where
        F: Fn(Subscriber<T>) + Send + Sync + 'static,
    {
        Self {
            routine: Arc::new(routine),
        }
    }

    /// Emits every item in order, then completes.
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Send + Sync + 'static,
    {
        let items: Arc<[T]> = items.into_iter().collect();
        Self::from_handler(move |mut subscriber| {
            for item in items.iter() {
                if subscriber.is_closed() {
                    return;
                }
                subscriber.next(item.clone());
            }
            subscriber.complete();
        })
    }

    pub fn empty() -> Self {
        Self::from_handler(|mut subscriber| subscriber.complete())
    }

    /// A source that never emits anything.
    pub fn never() -> Self {
        Self::from_handler(|_| {})
    }

    pub fn failed(error: impl Display) -> Self {
        let message = error.to_string();
        Self::from_handler(move |mut subscriber| subscriber.error(&message))
    }
}

impl<T> IObservable<T> for Observable<T> {
    fn subscribe<O: IObserver<T> + Send + 'static>(&self, observer: O) {
        (self.routine)(Subscriber::new(observer))
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            routine: Arc::clone(&self.routine),
        }
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

use crate::TaskSpawner;
use futures::FutureExt;
use ripple_core::{catch_panic, Failure, Observable};
use std::{fmt::Display, future::Future, panic::AssertUnwindSafe};

/// Bridges a one-shot asynchronous request into an [`Observable`].
///
/// Every subscription calls `make_request` for a fresh future and runs it on
/// `spawner`, so `subscribe` returns before the request settles. `Ok(value)`
/// arrives as `next(value)` followed by `completed`; `Err(e)` arrives as a
/// single `error` carrying `e`'s text. A panic while building or polling the
/// future is reported the same way.
pub fn from_future<T, E, Fut, F, S>(spawner: S, make_request: F) -> Observable<T>
where
    T: Send + 'static,
    E: Display + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    S: TaskSpawner + Send + Sync + 'static,
{
    Observable::from_handler(move |mut subscriber| {
        let request = match catch_panic("from_future", &make_request) {
            Ok(request) => request,
            Err(failure) => {
                tracing::debug!(%failure, "building request failed");
                subscriber.error(failure);
                return;
            }
        };

        spawner.spawn(async move {
            match AssertUnwindSafe(request).catch_unwind().await {
                Ok(Ok(value)) => {
                    subscriber.next(value);
                    subscriber.complete();
                }
                Ok(Err(e)) => {
                    tracing::debug!(error = %e, "request failed");
                    subscriber.error(e);
                }
                Err(payload) => subscriber.error(Failure::panicked("from_future", payload)),
            }
        });
    })
}

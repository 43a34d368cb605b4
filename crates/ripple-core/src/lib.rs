mod event;
mod observable;
mod observer;
mod recorder;
mod subscriber;

pub mod failure;

pub use event::Event;
pub use failure::{catch_panic, Failure};
pub use observable::{IObservable, Observable};
pub use observer::IObserver;
pub use recorder::Recorder;
pub use subscriber::Subscriber;

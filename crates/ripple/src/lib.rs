pub use ripple_adapters as adapters;
pub use ripple_core::*;
pub use ripple_operators as operators;

pub mod prelude {
    pub use ripple_adapters::{from_future, Emitter, TaskSpawner, ThreadSpawner};
    pub use ripple_core::{Event, IObservable, IObserver, Observable, Subscriber};
    pub use ripple_operators::ObservableExtensions;
}

use crate::Event;

pub trait IObserver<T> {
    fn notify(&mut self, event: Event<T>);

    /// Whether this observer has stopped accepting events.
    ///
    /// Producers may consult this to stop emitting early; events sent to a
    /// closed observer are dropped.
    fn is_closed(&self) -> bool {
        false
    }
}

impl<T, F: FnMut(Event<T>)> IObserver<T> for F {
    fn notify(&mut self, event: Event<T>) {
        (self)(event)
    }
}

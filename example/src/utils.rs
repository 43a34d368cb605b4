use ripple::Event;
use std::fmt::Debug;

pub fn print<T: Debug>(event: Event<T>) {
    match event {
        Event::Next(value) => println!("  next: {:?}", value),
        Event::Completed => println!("  completed"),
        Event::Error(message) => println!("  error: {}", message),
    }
}

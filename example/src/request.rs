use crate::utils::print;
use ripple::prelude::*;
use std::{sync::mpsc, time::Duration};

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// Stand-in for an HTTP client: only `https` addresses succeed.
fn get(address: &'static str) -> Observable<Response> {
    from_future(ThreadSpawner, move || async move {
        std::thread::sleep(Duration::from_millis(20));
        match address.strip_prefix("https://") {
            Some(host) => Ok(Response {
                status: 200,
                body: format!("hello from {}", host),
            }),
            None => Err(format!("refusing insecure request to {}", address)),
        }
    })
}

/// Subscribes and blocks the demo until the session terminates.
fn run<T: std::fmt::Debug + Send + 'static>(source: impl IObservable<T>) {
    let (sender, receiver) = mpsc::channel();
    source.subscribe(move |event: Event<T>| {
        let _ = sender.send(event);
    });

    for event in receiver.iter() {
        let terminal = event.is_terminal();
        print(event);
        if terminal {
            break;
        }
    }
}

#[cfg_attr(test, test)]
pub fn main() {
    println!("----- request example -----\n");

    println!("get(https://example.org).map(status)");
    run(get("https://example.org").map(|response: Response| response.status));

    println!("get(https://example.org).map(body)");
    run(get("https://example.org").map(|response: Response| response.body));

    println!("get(http://example.org)");
    run(get("http://example.org"));

    println!();
}

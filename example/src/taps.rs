use crate::utils::print;
use ripple::prelude::*;

#[cfg_attr(test, test)]
pub fn main() {
    println!("----- taps example -----\n");

    let button = Emitter::<()>::new();
    let presses = button.observable();

    presses.subscribe(print::<()>);
    presses
        .clone()
        .map(|_: ()| "pressed")
        .subscribe(print::<&str>);

    for _ in 0..2 {
        button.tap();
    }

    tracing::info!(listeners = button.listener_count(), "taps stream stays open");
    println!();
}

#![cfg_attr(test, cfg(test))]

mod request;
mod sequence;
mod taps;
mod utils;

use tracing_subscriber::EnvFilter;

#[cfg_attr(test, test)]
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    sequence::main();
    request::main();
    taps::main();
}

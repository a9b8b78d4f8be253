#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod counter;
mod error;
mod lazy;
mod manifest;
mod motion;
mod reveal;
mod theme;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("These page effects run in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

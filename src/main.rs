//! Profile photo positioner for the bakery staff forms.
//!
//! Build for the browser with `trunk build` or
//! `cargo build --target wasm32-unknown-unknown`.

mod app;
mod components;
mod config;
mod error;
mod fields;
mod listeners;
mod model;
mod state;
mod util;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(EnvFilter::new("info"));
    tracing_subscriber::registry().with(fmt_layer).init();

    if let Err(err) = app::mount() {
        tracing::error!(%err, "photo positioner failed to mount");
    }
}

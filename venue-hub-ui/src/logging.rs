//! Browser logging.
//!
//! Routes `tracing` events to the browser console.

use std::str::FromStr;
use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

static INIT: Once = Once::new();

/// Install the console subscriber. Later calls are ignored.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::INFO);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(MakeWebConsoleWriter::new())
            .without_time(); // no std::time in WASM

        tracing_subscriber::registry().with(level).with(fmt_layer).init();
    });
}

//! Tracing subscriber that writes to the browser console.
//!
//! Each formatted event is buffered and emitted as one console call at the
//! matching level. Timestamps are omitted: wasm32 has no system clock.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::config::LOG_LEVEL;

/// Install the console subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_new(LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            Level::DEBUG => console::debug_1(&message),
            Level::TRACE => console::log_1(&message),
        }
    }
}

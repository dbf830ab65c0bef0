//! Structured logging routed to the browser console. Events are formatted by
//! `tracing-subscriber` and each formatted line is handed to the console method
//! that matches its level, so browser devtools can filter them.

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the filter from configured directives (`"debug"`,
/// `"directory_web=trace"`); unparsable parts are skipped and INFO is the
/// default.
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.trim())
}

/// Installs the global subscriber and a panic hook that logs through it.
#[cfg(target_arch = "wasm32")]
pub fn init(directives: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(console::ConsoleMakeWriter)
        .with_env_filter(env_filter(directives))
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(%info, "panic");
    }));
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
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
            let line = String::from_utf8_lossy(&self.buffer);
            let message = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&message),
                Level::WARN => web_sys::console::warn_1(&message),
                Level::INFO => web_sys::console::info_1(&message),
                Level::DEBUG => web_sys::console::debug_1(&message),
                _ => web_sys::console::log_1(&message),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::env_filter;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn env_filter_uses_configured_level() {
        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(" trace ").max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn env_filter_defaults_to_info() {
        assert_eq!(env_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn env_filter_accepts_target_directives() {
        let filter = env_filter("directory_web=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}

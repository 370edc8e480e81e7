//! Tracing subscriber setup for the welcome program
//!
//! Standard output belongs to the banner, so every log event is written to
//! stderr. Nothing is shown by default (`warn` level); raise the level with
//! `RUST_LOG`, `--log-level`, or the `logging` section of `operit.yaml`.
//!
//! ## Filter precedence
//!
//! 1. `RUST_LOG`, when set
//! 2. `--log-level` on the command line, replacing the configured default level
//! 3. `logging.level` and `logging.modules` from the config file
//!
//! ## Output format
//!
//! INFO lines carry no prefix. Other levels are prefixed with the level, and
//! WARN/ERROR additionally carry the target and `file:line`:
//!
//! ```text
//! Starting welcome program
//! DEBUG: add(5, 3) = 8
//! WARN operit_template::app src/app.rs:42: something odd
//! ```

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact stderr formatter: bare INFO messages, level prefix otherwise,
/// and target plus `file:line` for WARN and ERROR
pub struct ConditionalLocationFormatter;

impl<S, N> FormatEvent<S, N> for ConditionalLocationFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        match *metadata.level() {
            Level::INFO => {}
            Level::DEBUG | Level::TRACE => write!(writer, "{}: ", metadata.level())?,
            _ => {
                write!(writer, "{} {}", metadata.level(), metadata.target())?;
                if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                    write!(writer, " {}:{}", file, line)?;
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Filter directives from config, with the default level optionally replaced
pub fn filter_directives(config: &LoggingConfig, level_override: Option<&str>) -> String {
    match level_override {
        Some(level) => {
            let mut overridden = config.clone();
            overridden.level = level.to_string();
            overridden.directives()
        }
        None => config.directives(),
    }
}

/// Build the env filter. `RUST_LOG` wins; malformed directives fall back to `warn`.
pub fn create_env_filter(config: &LoggingConfig, level_override: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }

    let directives = filter_directives(config, level_override);
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the stderr tracing subscriber.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_logging(config: &LoggingConfig, level_override: Option<&str>) {
    INIT.call_once(|| {
        let env_filter = create_env_filter(config, level_override);

        // try_init: a test harness may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(ConditionalLocationFormatter))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(move || writer.clone())
            .event_format(ConditionalLocationFormatter)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_info_has_no_prefix() {
        let out = capture(|| tracing::info!("plain message"));
        assert_eq!(out, "plain message\n");
    }

    #[test]
    fn test_debug_has_level_only() {
        let out = capture(|| tracing::debug!("detail"));
        assert_eq!(out, "DEBUG: detail\n");
    }

    #[test]
    fn test_warn_has_location() {
        let out = capture(|| tracing::warn!("careful"));
        assert!(out.starts_with("WARN operit_template::logging::tests "));
        assert!(out.contains("logging.rs:"));
        assert!(out.trim_end().ends_with(": careful"));
    }

    #[test]
    fn test_error_has_location() {
        let out = capture(|| tracing::error!("failed"));
        assert!(out.starts_with("ERROR operit_template::logging::tests "));
        assert!(out.trim_end().ends_with(": failed"));
    }

    #[test]
    fn test_filter_directives_override() {
        let mut config = LoggingConfig::default();
        config.modules.insert("operit_template".to_string(), "trace".to_string());

        assert_eq!(filter_directives(&config, None), "warn,operit_template=trace");
        assert_eq!(filter_directives(&config, Some("info")), "info,operit_template=trace");
    }
}

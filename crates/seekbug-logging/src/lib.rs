//! Tracing setup for SeekBug
//!
//! Both halves of SeekBug share a constraint: stdout is not theirs. The
//! extension runs inside the editor host and the adapter speaks DAP over
//! stdout, so the presets here log to stderr.
//!
//! Nothing in the workspace installs a subscriber on its own. The process
//! that embeds SeekBug calls [`init`] once at startup: the editor host with
//! [`LogConfig::for_extension`] before `seekbug_extension::activate`, the
//! adapter binary with [`LogConfig::for_adapter`] before it starts serving
//! `aiRequest`.
//!
//! ```rust,ignore
//! seekbug_logging::init(seekbug_logging::LogConfig::for_adapter(false))?;
//! ```
//!
//! `RUST_LOG` overrides the configured level unless `verbose` is set.

use std::io::IsTerminal;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, LocalTime, UtcTime};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing;

/// Where log lines go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogSink {
    #[default]
    Stderr,
    Stdout,
}

impl LogSink {
    fn is_terminal(self) -> bool {
        match self {
            LogSink::Stderr => std::io::stderr().is_terminal(),
            LogSink::Stdout => std::io::stdout().is_terminal(),
        }
    }

    fn make_writer(self) -> BoxMakeWriter {
        match self {
            LogSink::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogSink::Stdout => BoxMakeWriter::new(std::io::stdout),
        }
    }
}

/// Timezone of the RFC 3339 timestamp on each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl FormatTime for Clock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        match self {
            Clock::Local => LocalTime::rfc_3339().format_time(w),
            Clock::Utc => UtcTime::rfc_3339().format_time(w),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Force `debug`, ignoring `RUST_LOG`
    pub verbose: bool,
    pub sink: LogSink,
    pub clock: Clock,
    /// Print the module path of each event
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
            sink: LogSink::default(),
            clock: Clock::default(),
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Extension side: `info`, module paths shown
    pub fn for_extension(verbose: bool) -> Self {
        Self {
            verbose,
            with_target: true,
            ..Self::default()
        }
    }

    /// Adapter side: quiet unless something goes wrong
    pub fn for_adapter(verbose: bool) -> Self {
        Self {
            verbose,
            level: "warn".to_string(),
            ..Self::default()
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new("debug");
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install the global subscriber.
///
/// Fails if one is already installed, which happens when a host activates
/// the extension twice in one process; callers may ignore that.
pub fn init(config: LogConfig) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_target(config.with_target)
        .with_ansi(config.sink.is_terminal())
        .with_timer(config.clock)
        .with_writer(config.sink.make_writer());

    tracing_subscriber::registry()
        .with(config.filter())
        .with(layer)
        .try_init()
}

/// Route logs into the test harness's captured output. Idempotent.
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

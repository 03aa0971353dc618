use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Where progress output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Progress at `info` on stdout.
    Console,
    /// stdout carries seed YAML: only warnings and errors, on stderr.
    Quiet,
}

impl LogSink {
    pub fn for_stdout_mode(stdout: bool) -> Self {
        if stdout { LogSink::Quiet } else { LogSink::Console }
    }

    fn default_directive(self) -> &'static str {
        match self {
            LogSink::Console => "info",
            LogSink::Quiet => "warn",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(sink: LogSink) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(sink.default_directive()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time();

    // Colour only when the stream is a terminal.
    let _ = match sink {
        LogSink::Console => builder
            .with_ansi(std::io::stdout().is_terminal())
            .with_writer(std::io::stdout)
            .try_init(),
        LogSink::Quiet => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
    };
}

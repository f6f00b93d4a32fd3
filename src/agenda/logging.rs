//! Logging bootstrap for the binary.
//!
//! The library only talks to the `log` facade. The binary calls
//! [`init_logging`] once at startup to route records to stderr through
//! `flexi_logger`. `RUST_LOG` overrides the verbosity-derived level.

use flexi_logger::{Logger, LoggerHandle};

/// Maps the number of `-v` flags to a log spec.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Starts the stderr logger. The returned handle must be kept alive for the
/// life of the process.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle, String> {
    let spec = level_for_verbosity(verbosity);
    Logger::try_with_env_or_str(spec)
        .map_err(|err| format!("invalid log spec `{spec}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

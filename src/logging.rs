//! Logger setup for binaries. The library itself only uses the `log` facade.

use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Log to stderr using `RUST_LOG` if set, otherwise `fallback` (e.g. `"info"`).
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn init_logging(fallback: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(fallback)?
        .log_to_stderr()
        .format(opt_format)
        .start()
}

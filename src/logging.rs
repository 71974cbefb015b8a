use flexi_logger::{
    opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};

use crate::config::LoggingConfig;

/// Start the global logger. `RUST_LOG` overrides `config.level`.
///
/// With a directory configured, logs go to size-rotated files there;
/// otherwise to stderr when `stderr_allowed`, and nowhere when it is not
/// (the terminal UI owns the screen). The returned handle must be kept alive
/// for as long as logging is wanted.
pub fn setup_logging(
    config: &LoggingConfig,
    stderr_allowed: bool,
) -> Result<Option<LoggerHandle>, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(&config.level)?.format(opt_format);

    let handle = match &config.directory {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("connect_four"))
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start()?,
        None if stderr_allowed => logger.log_to_stderr().start()?,
        None => return Ok(None),
    };

    Ok(Some(handle))
}

use flexi_logger::{colored_opt_format, Age, Cleanup, Criterion, Duplicate, Logger, Naming, ReconfigurationHandle};
use once_cell::sync::OnceCell;

use crate::error::StartupError;

static LOGGER_HANDLE: OnceCell<ReconfigurationHandle> = OnceCell::new();

pub fn initialize() -> Result<(), StartupError> {
    let log_init_status = LOGGER_HANDLE.set(
        Logger::with_env_or_str("info")
            .duplicate_to_stderr(Duplicate::Debug)
            .log_to_file()
            .directory("logs")
            .format(colored_opt_format)
            .o_timestamp(true)
            .rotate(
                Criterion::Age(Age::Day),
                Naming::Timestamps,
                Cleanup::KeepLogAndZipFiles(10, 30),
            )
            .start_with_specfile("logconfig.toml")
            .map_err(|_| StartupError::NoLoggingSpec)?,
    );

    if log_init_status.is_err() {
        log::error!("The logging system was attempted to be initialized a second time!");
    }

    Ok(())
}

#[macro_use]
pub mod macros {
    #[macro_export]
    macro_rules! cogbot_info {
        ($($arg:tt)*) => ({
            log::info!($($arg)*);
        })
    }

    #[macro_export]
    macro_rules! cogbot_important {
        ($($arg:tt)*) => ({
            log::info!($($arg)*);
        })
    }

    #[macro_export]
    macro_rules! cogbot_error {
        ($($arg:tt)*) => ({
            log::error!($($arg)*);
        })
    }

    #[macro_export]
    macro_rules! cogbot_warn {
        ($($arg:tt)*) => ({
            log::warn!($($arg)*);
        })
    }
}

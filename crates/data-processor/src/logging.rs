use anyhow::{anyhow, Result};
use processor_core::settings::Settings;
use std::path::Path;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send logs to the configured file; the terminal belongs to the UI.
///
/// `RUST_LOG` takes precedence over the configured level. Keep the returned
/// guard alive until shutdown so buffered lines get flushed.
pub fn init(settings: &Settings) -> Result<WorkerGuard> {
    let path = Path::new(&settings.log_file);
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file has no file name: {}", settings.log_file))?
        .to_string_lossy()
        .into_owned();
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}

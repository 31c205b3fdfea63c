//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;

/// Installs the global subscriber. Console output goes to stderr so that
/// command output on stdout stays machine readable.
///
/// The returned guard must be held for the lifetime of the process when file
/// logging is enabled, otherwise buffered lines are lost.
pub fn init_telemetry(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "chore-ledger.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = settings
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let plain_layer = (!settings.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(plain_layer)
        .with(file_layer)
        .init();

    guard
}

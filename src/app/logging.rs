//! Usage: Process-wide tracing setup (console + daily rolling file under `<app dir>/logs`).

use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "pixel-press";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;
const DEFAULT_FILTER: &str = "info";

struct LoggingState {
    installed: bool,
    _file_guard: Option<WorkerGuard>,
}

static STATE: OnceLock<LoggingState> = OnceLock::new();

/// Idempotent; later calls are ignored. File logging is skipped (console only)
/// when `logs_dir` cannot be used. Returns `true` when this process's global
/// subscriber (and its `log` bridge) is the one installed here.
pub fn init(logs_dir: Option<&Path>) -> bool {
    STATE
        .get_or_init(|| {
            let env_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

            let mut layers = vec![fmt::layer().compact().with_target(false).boxed()];

            let (file_layer_err, file_guard) = match logs_dir.map(file_appender).transpose() {
                Ok(Some(appender)) => {
                    let (writer, guard) = tracing_appender::non_blocking(appender);
                    layers.push(fmt::layer().with_writer(writer).with_ansi(false).boxed());
                    (None, Some(guard))
                }
                Ok(None) => (None, None),
                Err(err) => (Some(err), None),
            };

            // Also installs the `log` -> `tracing` bridge used by the shell runtime.
            let installed = match tracing_subscriber::registry()
                .with(env_filter)
                .with(layers)
                .try_init()
            {
                Ok(()) => true,
                Err(err) => {
                    eprintln!("tracing subscriber not installed: {err}");
                    false
                }
            };

            if let Some(err) = file_layer_err {
                tracing::warn!("file logging disabled: {}", err);
            }
            LoggingState {
                installed,
                _file_guard: file_guard,
            }
        })
        .installed
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create log dir {}: {e}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .map_err(|e| format!("failed to create log appender: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fs::test_support::unique_tmp_dir;

    #[test]
    fn file_appender_creates_missing_dir() {
        let dir = unique_tmp_dir("logging").join("logs");
        assert!(file_appender(&dir).is_ok());
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(dir.parent().expect("parent"));
    }

    // The only test that touches the global subscriber.
    #[test]
    fn init_installs_subscriber_and_log_bridge_once() {
        let dir = unique_tmp_dir("logging");
        let logs = dir.join("logs");

        assert!(init(Some(&logs)));
        assert!(init(None), "later calls report the first outcome");
        assert!(
            tracing_log::LogTracer::init().is_err(),
            "log bridge already installed by init"
        );
        tracing::info!("logging initialised");
        assert!(logs.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }
}

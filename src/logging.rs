use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// HTTP client crates stay at info even when the relay runs at debug.
const QUIET_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Filter directives for the configured level.
pub fn filter_directives(config: &AppConfig) -> String {
    let mut directives = config.log_level.clone();
    for target in QUIET_TARGETS {
        directives.push_str(&format!(",{}=info", target));
    }
    directives
}

/// Install the global subscriber.
///
/// An empty `log_dir` logs to stdout only (hosted runtimes collect stdout)
/// and returns `None`. Otherwise a rolling file is written; keep the returned
/// guard alive for the lifetime of the process or buffered output is lost.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_dir.is_empty() {
        if config.use_json {
            registry
                .with(fmt::layer().json().with_target(true).with_ansi(false))
                .init();
        } else {
            registry.with(fmt::layer().with_target(false)).init();
        }
        return None;
    }

    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    Some(guard)
}

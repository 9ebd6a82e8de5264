//! Logging Infrastructure
//!
//! Console logging plus an optional daily-rotating file pair:
//! - `order-server-YYYY-MM-DD.log` — application logs
//! - `security-YYYY-MM-DD.log` — security events (target = "security")
//!
//! `RUST_LOG` overrides the configured level via the standard env filter.

use std::fs;
use std::sync::Mutex;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console-only logging
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize logging, optionally writing to `log_dir`
///
/// 控制台始终输出；`log_dir` 可写时额外落盘，安全事件单独成文件。
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let writable_dir = log_dir.filter(|dir| fs::create_dir_all(dir).is_ok());
    match writable_dir {
        Some(dir) => {
            let app_log = RollingFileAppender::new(Rotation::DAILY, dir, "order-server");
            let app_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(app_log))
                .with_filter(filter_fn(|meta| meta.target() != "security"));

            let security_log = RollingFileAppender::new(Rotation::DAILY, dir, "security");
            let security_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(security_log))
                .with_filter(filter_fn(|meta| meta.target() == "security"));

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(app_layer)
                .with(security_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
        }
    }
}

// src/log.rs
//
// Subscriber setup. Call sites use logf!/logd!/logw!/loge! from macros.rs.
// Everything goes to LOG_FILE; the CLI can mirror to stderr as well.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, time::Uptime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::consts::{LOG_DIR, LOG_FILE};

#[derive(Clone, Debug)]
pub struct LogOptions {
    /// Filter used when RUST_LOG is not set ("info", "debug", ...)
    pub default_filter: String,
    /// Mirror log lines to stderr (CLI)
    pub stderr: bool,
    /// Write to LOG_DIR/LOG_FILE
    pub file: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { default_filter: s!("info"), stderr: false, file: true }
    }
}

impl LogOptions {
    /// -v → debug, -vv → trace
    pub fn from_verbosity(count: u8) -> Self {
        let default_filter = match count {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        Self { default_filter: s!(default_filter), stderr: count > 0, file: true }
    }
}

fn open_log_file() -> Option<File> {
    let dir = Path::new(LOG_DIR);
    if !dir.exists() && fs::create_dir_all(dir).is_err() {
        return None;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(opts: &LogOptions) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&opts.default_filter));

    let file_layer = if opts.file {
        open_log_file().map(|f| {
            fmt::layer()
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(f))
        })
    } else {
        None
    };

    let stderr_layer = opts.stderr.then(|| {
        fmt::layer()
            .with_timer(Uptime::default())
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}

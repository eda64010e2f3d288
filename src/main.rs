use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use taskd::{config::ServerConfig, rest, storage::Storage, tasks::TaskService, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(name = "taskd", about = "taskd — task management REST service", version)]
struct Args {
    /// HTTP server port
    #[arg(long, env = "TASKD_PORT")]
    port: Option<u16>,

    /// Data directory for config and the SQLite database
    #[arg(long, env = "TASKD_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,

    /// Bind address for the HTTP server (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKD_BIND")]
    bind_address: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "TASKD_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ── Logging setup ────────────────────────────────────────────────────────
    // Init once — must happen before any tracing calls.
    let log_level = args.log.as_deref().unwrap_or("info").to_owned();
    let log_format =
        std::env::var("TASKD_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let _file_guard = setup_logging(&log_level, args.log_file.as_deref(), &log_format);

    run_server(args.port, args.data_dir, args.log, args.bind_address).await
}

async fn run_server(
    port: Option<u16>,
    data_dir: Option<std::path::PathBuf>,
    log: Option<String>,
    bind_address: Option<String>,
) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "taskd starting");

    let config = Arc::new(ServerConfig::new(port, data_dir, log, bind_address));
    info!(
        data_dir = %config.data_dir.display(),
        port = config.port,
        "config loaded"
    );

    let storage = Arc::new(
        Storage::new_with_slow_query(
            &config.data_dir,
            config.observability.slow_query_threshold_ms,
        )
        .await?,
    );

    let tasks = Arc::new(TaskService::new(storage.clone()));

    let ctx = Arc::new(AppContext {
        config,
        storage,
        tasks,
        started_at: std::time::Instant::now(),
    });

    rest::start_rest_server(ctx).await
}

/// Initialize the tracing subscriber.
/// With `log_file` set, logs go to both stdout and a daily-rolling file; the
/// returned `WorkerGuard` must stay alive for the process lifetime.
///
/// `log_format` is `"pretty"` (human-readable compact) or `"json"`
/// (structured, for log aggregators). A log directory that cannot be created
/// falls back to stdout-only — never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    let stdout_only = |use_json: bool| {
        if use_json {
            tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        } else {
            tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        }
    };

    let Some(path) = log_file else {
        stdout_only(use_json);
        return None;
    };

    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let filename = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("taskd.log"));

    // tracing-appender needs the directory to exist before it opens the file.
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warn: could not create log directory '{}': {e} — falling back to stdout",
            dir.display()
        );
        stdout_only(use_json);
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    if use_json {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().json())
            .with(fmt::layer().json().with_writer(non_blocking))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().compact())
            .with(fmt::layer().with_writer(non_blocking))
            .init();
    }

    Some(guard)
}

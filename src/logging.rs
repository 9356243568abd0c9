use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    if let Some(level) = level.to_level() {
        // fails only if a logger is already set, which keeps the first one
        console_log::init_with_level(level).ok();
    }
}

/// Keeps the global slog logger alive; drop it last.
#[cfg(not(target_arch = "wasm32"))]
pub struct LoggerGuard {
    _scope: slog_scope::GlobalLoggerGuard,
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) -> anyhow::Result<LoggerGuard> {
    use slog::Drain;

    let decorator = slog_term::PlainSyncDecorator::new(std::io::stdout());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();

    let drain = slog_async::Async::new(drain).build().fuse();

    let drain = slog_envlogger::LogBuilder::new(drain)
        .filter(None, filter_level(level))
        .build();

    let log = slog::Logger::root(drain, slog::o!());
    let scope = slog_scope::set_global_logger(log);
    slog_stdlog::init()?;
    log::set_max_level(level);

    Ok(LoggerGuard { _scope: scope })
}

#[cfg(not(target_arch = "wasm32"))]
fn filter_level(level: LevelFilter) -> slog::FilterLevel {
    match level {
        LevelFilter::Off => slog::FilterLevel::Off,
        LevelFilter::Error => slog::FilterLevel::Error,
        LevelFilter::Warn => slog::FilterLevel::Warning,
        LevelFilter::Info => slog::FilterLevel::Info,
        LevelFilter::Debug => slog::FilterLevel::Debug,
        LevelFilter::Trace => slog::FilterLevel::Trace,
    }
}

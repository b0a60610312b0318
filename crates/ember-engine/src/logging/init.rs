use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "ember_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior. Ignored on wasm32, where
/// output goes to the browser console.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

/// Whether log output may contain ANSI color sequences.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WriteStyle {
    Auto,
    Always,
    Never,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        // wgpu is chatty at info; keep it at warn unless asked.
        builder.filter_level(log::LevelFilter::Info);
        builder.filter_module("wgpu_core", log::LevelFilter::Warn);
        builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
    }

    builder.write_style(match config.write_style {
        WriteStyle::Auto => env_logger::WriteStyle::Auto,
        WriteStyle::Always => env_logger::WriteStyle::Always,
        WriteStyle::Never => env_logger::WriteStyle::Never,
    });

    // `try_init` so a host that already installed a logger keeps it.
    if builder.try_init().is_err() {
        log::warn!("a global logger was already installed; keeping it");
    }
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    console_error_panic_hook::set_once();

    let level = config
        .env_filter
        .as_deref()
        .and_then(|f| f.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);

    if console_log::init_with_level(level).is_err() {
        log::warn!("a global logger was already installed; keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn existing_global_logger_is_kept() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Both calls find a logger in place; neither may panic.
        install(LoggingConfig::default());
        install(LoggingConfig {
            env_filter: Some("warn".to_string()),
            write_style: WriteStyle::Never,
        });
    }

    #[test]
    fn default_config_reads_the_environment() {
        let config = LoggingConfig::default();
        assert_eq!(config.env_filter, None);
        assert_eq!(config.write_style, WriteStyle::Auto);
    }
}

use std::sync::Once;

use log::LevelFilter;

/// Modules that log once per recorded or replayed request.
const PER_REQUEST_MODULES: [&str; 2] = ["lantern_video::canvas", "lantern_video::renderer"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax, e.g.
/// `"lantern_video::texture=debug"`. Without `frame_trace`, the per-request
/// modules are capped at `debug` so a `trace` filter stays readable; an
/// explicit filter naming those modules still wins.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub frame_trace: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            frame_trace: false,
        }
    }
}

impl LoggingConfig {
    /// Config using `filter`, or `RUST_LOG` when `None`.
    pub fn with_filter(filter: Option<String>) -> Self {
        Self { env_filter: filter, ..Self::default() }
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Info);

        if !self.frame_trace {
            for module in PER_REQUEST_MODULES {
                builder.filter_module(module, LevelFilter::Debug);
            }
        }

        // Later directives override the defaults above.
        if let Some(filter) = self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            builder.parse_filters(&filter);
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call; later calls do nothing.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // A test harness or host application may own the logger already.
        if config.builder().try_init().is_ok() {
            log::debug!("logging initialized (frame trace {})", config.frame_trace);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::with_filter(Some("warn".into())));
        init_logging(LoggingConfig::default());
        log::warn!("still logging");
    }

    #[test]
    fn with_filter_keeps_defaults() {
        let c = LoggingConfig::with_filter(Some("lantern_video=trace".into()));
        assert_eq!(c.env_filter.as_deref(), Some("lantern_video=trace"));
        assert!(!c.frame_trace);
    }
}

mod app;
mod format;
mod poster_cache;
mod screen;
mod style;
mod theme;
mod widgets;

use popcorn_core::config::AppConfig;
use popcorn_core::error::ConfigError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "popcorn=debug,popcorn_core=debug,popcorn_api=debug";

#[derive(Debug, thiserror::Error)]
enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gui(#[from] iced::Error),
}

fn main() -> Result<(), LaunchError> {
    let _log_guard = init_logging();

    let config = AppConfig::load().inspect_err(|e| tracing::error!(error = %e, "bad config"))?;
    let client = config
        .catalog_client()
        .inspect_err(|e| tracing::error!(error = %e, "cannot build catalog client"))?;
    tracing::info!(path = %AppConfig::config_path().display(), "configuration loaded");

    let win = iced::window::Settings {
        size: iced::Size::new(1180.0, 760.0),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    iced::application(
        move || app::Popcorn::new(config.clone(), client.clone()),
        app::Popcorn::update,
        app::Popcorn::view,
    )
    .title(app::Popcorn::title)
    .theme(app::Popcorn::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()?;

    Ok(())
}

/// Log to stderr and to a daily rolling file. `RUST_LOG` overrides the filter.
///
/// The returned guard flushes the file writer on drop.
fn init_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let log_dir = AppConfig::log_dir();
    let (file_layer, guard) = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "popcorn.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

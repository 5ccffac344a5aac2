use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogConfig, LogFormat};

/// Initializes the global tracing subscriber with the configured level and format.
pub fn init_tracing_subscriber(config: &LogConfig) {
	let registry = tracing_subscriber::registry().with(LevelFilter::from_level(config.level));

	match config.format {
		LogFormat::Pretty => registry
			.with(tracing_subscriber::fmt::layer().with_ansi(true))
			.init(),
		LogFormat::Json => registry
			.with(tracing_subscriber::fmt::layer().json())
			.init(),
	}

	tracing::info!(level = %config.level, format = ?config.format, "logging initialized");
}

#![warn(clippy::pedantic)]

mod config;
mod error;
mod extract;
mod openapi;
mod route;
mod seed;
mod service;
mod store;
mod trace;

use std::{process::ExitCode, sync::Arc};

use route::{item::model::Item, post::model::Post};
use service::{ItemService, PostService};
use store::MemoryStore;

pub type AppState = State;

/// The shared application state.
///
/// Each service owns its store behind a trait object, so handlers only ever
/// see the narrow service surface. Cloning is cheap.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub posts: PostService,
	pub items: ItemService,
}

impl State {
	/// Creates a state backed by fresh, empty in-memory stores.
	pub fn in_memory() -> Self {
		Self {
			posts: PostService::new(Arc::new(MemoryStore::<Post>::new())),
			items: ItemService::new(Arc::new(MemoryStore::<Item>::new())),
		}
	}
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
	#[error("seeding failed: {0}")]
	Seed(#[from] seed::Error),
	#[error("server error: {0}")]
	Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
	let config = match config::Config::from_env() {
		Ok(config) => config,
		Err(error) => {
			eprintln!("invalid configuration: {error}");
			return ExitCode::FAILURE;
		}
	};

	trace::init_tracing_subscriber(&config.log);

	match run(&config).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			tracing::error!(%error, "failed to run server");
			ExitCode::FAILURE
		}
	}
}

async fn run(config: &config::Config) -> Result<(), StartupError> {
	let state = State::in_memory();

	seed::load(&state.posts)?;

	let app = route::router(state);
	let listener = tokio::net::TcpListener::bind((config.host, config.port)).await?;

	tracing::info!("listening on {}", listener.local_addr()?);

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("server stopped");

	Ok(())
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(%error, "failed to listen for shutdown signal");
		std::future::pending::<()>().await;
	}
}

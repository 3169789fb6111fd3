//! App builder - constructs and runs the portal application

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
pub use portal_core::app::{App, AppState, VERSION};
use portal_core::config::PortalConfig;
use portal_types::store_adapter::StoreAdapter;

pub struct AppBuilder {
	opts: PortalConfig,
	store: Option<Arc<dyn StoreAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// a subscriber installed earlier (tests, embedding binary) is kept
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder { opts: PortalConfig::default(), store: None }
	}

	// Opts
	pub fn config(&mut self, opts: PortalConfig) -> &mut Self {
		self.opts = opts;
		self
	}
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn trust_principal_headers(&mut self, trust: bool) -> &mut Self {
		self.opts.trust_principal_headers = trust;
		self
	}
	pub fn max_transition_retries(&mut self, retries: u32) -> &mut Self {
		self.opts.max_transition_retries = retries;
		self
	}

	// Adapters
	pub fn store_adapter(&mut self, store: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store = Some(store);
		self
	}

	/// Assembles the shared state without binding a listener
	pub fn build(self) -> ClResult<App> {
		let Some(store) = self.store else {
			error!("FATAL: No store adapter configured");
			return Err(Error::Internal("No store adapter configured".to_string()));
		};

		Ok(Arc::new(AppState { opts: self.opts, store }))
	}

	pub async fn run(self) -> ClResult<()> {
		info!("portal V{}", VERSION);

		let app = self.build()?;
		if app.opts.trust_principal_headers {
			warn!("Principal is taken from X-Portal-* headers, the gateway must strip them from client requests");
		}
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|e| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, e);
			e
		})?;
		info!("Listening on HTTP {}", app.opts.listen);

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
		info!("Shut down");

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Cannot install shutdown handler: {}", e);
		std::future::pending::<()>().await;
	}
}

// vim: ts=4

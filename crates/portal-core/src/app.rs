//! App state type

use std::sync::Arc;

use crate::config::PortalConfig;
use portal_types::store_adapter::StoreAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: PortalConfig,
	pub store: Arc<dyn StoreAdapter>,
}

pub type App = Arc<AppState>;

// vim: ts=4

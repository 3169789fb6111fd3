use std::{env, process::ExitCode, sync::Arc};

use portal::config::PortalConfig;
use portal::error::ClResult;
use portal::store_adapter::StoreAdapter;
use portal::AppBuilder;
use portal_store_adapter_memory::StoreAdapterMemory;
use tracing::{error, info};

/// Companies created at startup, comma separated
const SEED_COMPANIES_VAR: &str = "PORTAL_SEED_COMPANIES";

async fn seed(store: &dyn StoreAdapter) -> ClResult<()> {
	let names = env::var(SEED_COMPANIES_VAR).unwrap_or_default();
	for name in names.split(',').map(str::trim).filter(|name| !name.is_empty()) {
		let company = store.create_company(name).await?;
		info!("Seeded company {} ({})", company.name, company.tn_id);
	}
	Ok(())
}

async fn run() -> ClResult<()> {
	let mut builder = AppBuilder::new();
	let config = PortalConfig::from_env()?;

	let store = Arc::new(StoreAdapterMemory::new());
	seed(store.as_ref()).await?;

	builder.config(config).store_adapter(store);
	builder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
	match run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("FATAL: {}", e);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4

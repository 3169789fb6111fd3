//! Runtime configuration
//!
//! Loaded from environment variables, falling back to defaults:
//!
//! | variable                        | default          |
//! |---------------------------------|------------------|
//! | `PORTAL_LISTEN`                 | `127.0.0.1:8080` |
//! | `PORTAL_TRUST_HEADERS`          | `false`          |
//! | `PORTAL_MAX_TRANSITION_RETRIES` | `3`              |

use std::str::FromStr;

use crate::prelude::*;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_TRANSITION_RETRIES: u32 = 3;

#[derive(Clone, Debug)]
pub struct PortalConfig {
	pub listen: Box<str>,
	/// Build the principal from `X-Portal-*` headers set by the authenticating gateway
	pub trust_principal_headers: bool,
	/// Re-checks after a concurrent status change before giving up with a conflict
	pub max_transition_retries: u32,
}

impl Default for PortalConfig {
	fn default() -> Self {
		Self {
			listen: DEFAULT_LISTEN.into(),
			trust_principal_headers: false,
			max_transition_retries: DEFAULT_MAX_TRANSITION_RETRIES,
		}
	}
}

impl PortalConfig {
	pub fn from_env() -> ClResult<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Builds the config from an arbitrary variable lookup
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClResult<Self> {
		let mut config = Self::default();

		if let Some(listen) = lookup("PORTAL_LISTEN") {
			config.listen = listen.into();
		}
		if let Some(trust) = parse_var::<bool>(&lookup, "PORTAL_TRUST_HEADERS")? {
			config.trust_principal_headers = trust;
		}
		if let Some(retries) = parse_var::<u32>(&lookup, "PORTAL_MAX_TRANSITION_RETRIES")? {
			config.max_transition_retries = retries;
		}

		Ok(config)
	}
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> ClResult<Option<T>> {
	match lookup(name) {
		None => Ok(None),
		Some(value) => value
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| Error::ConfigError(format!("invalid value for {}: {:?}", name, value))),
	}
}


// vim: ts=4

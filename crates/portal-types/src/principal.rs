//! The authenticated caller of one request.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::role::Role;

/// Context struct for an authenticated user
///
/// Resolved by the authentication collaborator and passed explicitly into
/// every core call. It is never stored in global state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
	pub user_id: Box<str>,
	pub role: Role,
	pub tn_id: TnId,
}

impl Principal {
	pub fn new(user_id: impl Into<Box<str>>, role: Role, tn_id: TnId) -> Self {
		Self { user_id: user_id.into(), role, tn_id }
	}
}

// vim: ts=4

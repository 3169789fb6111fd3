//! User roles and the role classes used by the workflow tables.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Role of a user record. Changed only by an administrative action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	ClientUser,
	ClientAdmin,
	/// Operator of the portal, not bound to a client tenant
	CccStaff,
}

/// Behaviorally distinct role groups for status transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleClass {
	Client,
	Staff,
}

impl Role {
	pub const ALL: [Role; 3] = [Role::ClientUser, Role::ClientAdmin, Role::CccStaff];

	pub const fn as_str(self) -> &'static str {
		match self {
			Role::ClientUser => "CLIENT_USER",
			Role::ClientAdmin => "CLIENT_ADMIN",
			Role::CccStaff => "CCC_STAFF",
		}
	}

	pub const fn class(self) -> RoleClass {
		match self {
			Role::ClientUser | Role::ClientAdmin => RoleClass::Client,
			Role::CccStaff => RoleClass::Staff,
		}
	}

	pub const fn is_staff(self) -> bool {
		matches!(self.class(), RoleClass::Staff)
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Role {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::ALL
			.into_iter()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| Error::ValidationError(format!("unknown role: {}", s)))
	}
}


// vim: ts=4

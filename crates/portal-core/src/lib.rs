//! Authorization and workflow core of the client order portal.
//!
//! - [`perm`]: static action -> roles table, `can` / `assert_can`
//! - [`scope`]: tenant scoping of every entity access
//! - [`workflow`]: role-dependent status transition tables
//! - [`project`]: services combining the three with a [`StoreAdapter`]
//!
//! The decision functions are pure and synchronous. Principals are always
//! passed in explicitly.
//!
//! [`StoreAdapter`]: portal_types::store_adapter::StoreAdapter

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod config;
pub mod extract;
pub mod middleware;
pub mod perm;
pub mod prelude;
pub mod project;
pub mod scope;
pub mod workflow;

// Re-export commonly used types
pub use app::{App, AppState};
pub use config::PortalConfig;
pub use extract::{Auth, OptionalRequestId, RequestedTenant};
pub use middleware::{PermissionCheckOutput, check_perm};

// vim: ts=4

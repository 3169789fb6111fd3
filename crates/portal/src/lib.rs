//! Client order portal server.
//!
//! # Features
//!
//! - Multi-tenant: every project belongs to exactly one company
//! - Per-action permission table over three roles
//! - Project workflow with separate client and staff transition tables
//! - Staff cross-tenant view behind an explicit capability

// Re-export shared types and adapter traits from portal-types
pub use portal_types::action;
pub use portal_types::error;
pub use portal_types::principal;
pub use portal_types::role;
pub use portal_types::store_adapter;
pub use portal_types::types;
pub use portal_types::workflow;

// Core re-exports
pub use portal_core::project as service;
pub use portal_core::workflow as state_machine;
pub use portal_core::{config, extract, middleware, perm, scope};

// Feature crate re-exports
pub use portal_project as api;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4

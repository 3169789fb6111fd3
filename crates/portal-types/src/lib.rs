//! Shared types, vocabulary and adapter traits for the client order portal.
//!
//! This crate holds everything the authorization core and the store adapters
//! have to agree on: roles, the closed action vocabulary, the workflow states,
//! the request principal, the error type and the `StoreAdapter` trait.

pub mod action;
pub mod error;
pub mod prelude;
pub mod principal;
pub mod role;
pub mod store_adapter;
pub mod types;
pub mod workflow;

// vim: ts=4

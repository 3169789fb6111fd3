//! Custom extractors for portal-specific data

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::prelude::*;
use portal_types::principal::Principal;

// Auth //
//******//
/// The authenticated principal, inserted into request extensions by the
/// authentication layer in front of the handlers
#[derive(Debug, Clone)]
pub struct Auth(pub Principal);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// RequestedTenant //
//*****************//
/// Tenant explicitly requested with the `tenant` query parameter.
///
/// This is only a request; the effective tenant is decided by
/// [`crate::scope::scope_filter`].
#[derive(Debug, Clone, Copy)]
pub struct RequestedTenant(pub Option<TnId>);

#[derive(Deserialize)]
struct TenantQuery {
	tenant: Option<TnId>,
}

impl<S> FromRequestParts<S> for RequestedTenant
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let Query(query) = Query::<TenantQuery>::try_from_uri(&parts.uri)
			.map_err(|_| Error::ValidationError("invalid tenant parameter".into()))?;
		Ok(RequestedTenant(query.tenant))
	}
}

// RequestId //
//***********//
/// Request ID for tracing and debugging
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Optional Request ID extractor - always succeeds, returns None if not available
#[derive(Clone, Debug)]
pub struct OptionalRequestId(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalRequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let req_id = parts.extensions.get::<RequestId>().map(|r| r.0.clone());
		Ok(OptionalRequestId(req_id))
	}
}

// vim: ts=4

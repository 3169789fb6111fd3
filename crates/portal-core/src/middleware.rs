//! Custom middlewares

use axum::{
	extract::{Request, State},
	http::{HeaderMap, HeaderValue},
	middleware::Next,
	response::Response,
};
use std::pin::Pin;

use crate::extract::{Auth, RequestId};
use crate::perm;
use crate::prelude::*;
use portal_types::action::Action;
use portal_types::principal::Principal;
use portal_types::role::Role;

pub const HEADER_USER: &str = "x-portal-user";
pub const HEADER_ROLE: &str = "x-portal-role";
pub const HEADER_TENANT: &str = "x-portal-tenant";
pub const HEADER_REQUEST_ID: &str = "x-request-id";

pub type PermissionCheckOutput = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// Middleware factory gating a route on a single action
///
/// # Arguments
/// * `action` - The action the principal's role must be allowed to perform
///
/// # Returns
/// A cloneable middleware function usable with `axum::middleware::from_fn`
pub fn check_perm(action: Action) -> impl Fn(Auth, Request, Next) -> PermissionCheckOutput + Clone {
	move |auth, req, next| Box::pin(check_permission(auth, req, next, action))
}

async fn check_permission(
	Auth(principal): Auth,
	req: Request,
	next: Next,
	action: Action,
) -> Result<Response, Error> {
	if !perm::can(principal.role, action) {
		warn!(
			subject = %principal.user_id,
			tenant = %principal.tn_id,
			role = %principal.role,
			action = %action,
			path = %req.uri().path(),
			"permission denied"
		);
		return Err(Error::PermissionDenied { role: principal.role, action });
	}

	Ok(next.run(req).await)
}

/// Builds the principal from the `X-Portal-*` headers of an authenticating gateway.
///
/// Only active when `trust_principal_headers` is configured. Requests without
/// any of the headers pass through unauthenticated; a partial or malformed
/// set is rejected.
pub async fn trusted_principal(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> ClResult<Response> {
	if app.opts.trust_principal_headers {
		if let Some(principal) = principal_from_headers(req.headers())? {
			debug!(subject = %principal.user_id, role = %principal.role, tenant = %principal.tn_id, "principal from gateway headers");
			req.extensions_mut().insert(Auth(principal));
		}
	}

	Ok(next.run(req).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> ClResult<Option<&'a str>> {
	headers.get(name).map(|value| value.to_str().map_err(|_| Error::Unauthorized)).transpose()
}

pub fn principal_from_headers(headers: &HeaderMap) -> ClResult<Option<Principal>> {
	let user_id = header_str(headers, HEADER_USER)?;
	let role = header_str(headers, HEADER_ROLE)?;
	let tn_id = header_str(headers, HEADER_TENANT)?;

	match (user_id, role, tn_id) {
		(None, None, None) => Ok(None),
		(Some(user_id), Some(role), Some(tn_id)) if !user_id.trim().is_empty() => {
			let role = role.trim().parse::<Role>().map_err(|_| Error::Unauthorized)?;
			let tn_id = tn_id.parse::<TnId>().map_err(|_| Error::Unauthorized)?;
			Ok(Some(Principal::new(user_id.trim(), role, tn_id)))
		}
		_ => {
			warn!("incomplete principal headers");
			Err(Error::Unauthorized)
		}
	}
}

/// Assigns a request id (reusing the caller's `X-Request-Id` if present)
/// and echoes it on the response
pub async fn request_id(mut req: Request, next: Next) -> Response {
	let req_id = req
		.headers()
		.get(HEADER_REQUEST_ID)
		.and_then(|h| h.to_str().ok())
		.filter(|id| !id.is_empty() && id.len() <= 64)
		.map_or_else(|| uuid::Uuid::new_v4().simple().to_string(), ToString::to_string);

	req.extensions_mut().insert(RequestId(req_id.clone()));
	let mut res = next.run(req).await;
	if let Ok(value) = HeaderValue::from_str(&req_id) {
		res.headers_mut().insert(HEADER_REQUEST_ID, value);
	}
	res
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		Router,
		body::Body,
		http::{self, HeaderName, StatusCode},
		routing::get,
	};
	use tower::ServiceExt;

	fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
		let mut map = HeaderMap::new();
		for &(name, value) in pairs {
			map.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
		}
		map
	}

	#[test]
	fn test_principal_from_headers() {
		let map = headers(&[(HEADER_USER, "alice"), (HEADER_ROLE, "CLIENT_ADMIN"), (HEADER_TENANT, "7")]);
		let principal = principal_from_headers(&map).unwrap().unwrap();
		assert_eq!(principal, Principal::new("alice", Role::ClientAdmin, TnId(7)));
	}

	#[test]
	fn test_no_headers() {
		assert!(principal_from_headers(&HeaderMap::new()).unwrap().is_none());
	}

	#[test]
	fn test_rejects_partial_or_invalid_headers() {
		let partial = headers(&[(HEADER_USER, "alice"), (HEADER_ROLE, "CLIENT_ADMIN")]);
		assert!(matches!(principal_from_headers(&partial), Err(Error::Unauthorized)));

		let bad_role = headers(&[(HEADER_USER, "alice"), (HEADER_ROLE, "ROOT"), (HEADER_TENANT, "7")]);
		assert!(matches!(principal_from_headers(&bad_role), Err(Error::Unauthorized)));

		let bad_tenant = headers(&[(HEADER_USER, "alice"), (HEADER_ROLE, "CCC_STAFF"), (HEADER_TENANT, "x")]);
		assert!(matches!(principal_from_headers(&bad_tenant), Err(Error::Unauthorized)));

		let empty_user = headers(&[(HEADER_USER, " "), (HEADER_ROLE, "CCC_STAFF"), (HEADER_TENANT, "1")]);
		assert!(matches!(principal_from_headers(&empty_user), Err(Error::Unauthorized)));
	}

	fn request(auth: Option<Principal>) -> Request {
		let mut req = http::Request::builder().uri("/").body(Body::empty()).unwrap();
		if let Some(principal) = auth {
			req.extensions_mut().insert(Auth(principal));
		}
		req
	}

	#[tokio::test]
	async fn test_check_perm_layer() {
		let router = Router::new()
			.route("/", get(|| async { "ok" }))
			.route_layer(axum::middleware::from_fn(check_perm(Action::InvoiceVoid)))
			.layer(axum::middleware::from_fn(request_id));

		let staff = Principal::new("carol", Role::CccStaff, TnId(1));
		let res = router.clone().oneshot(request(Some(staff))).await.unwrap();
		assert_eq!(res.status(), StatusCode::OK);
		assert!(res.headers().contains_key(HEADER_REQUEST_ID));

		let user = Principal::new("alice", Role::ClientUser, TnId(1));
		let res = router.clone().oneshot(request(Some(user))).await.unwrap();
		assert_eq!(res.status(), StatusCode::FORBIDDEN);

		let res = router.oneshot(request(None)).await.unwrap();
		assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
	}
}

// vim: ts=4

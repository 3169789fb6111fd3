//! HTTP API tests
//!
//! The principal comes from the gateway headers, so every request states
//! its user, role and tenant explicitly.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use portal::store_adapter::StoreAdapter;
use portal::types::TnId;
use portal::{routes, AppBuilder};
use portal_store_adapter_memory::StoreAdapterMemory;

struct TestApp {
	router: Router,
	acme: TnId,
	globex: TnId,
}

async fn test_app() -> TestApp {
	let store = Arc::new(StoreAdapterMemory::new());
	let acme = store.create_company("Acme").await.expect("Failed to create company").tn_id;
	let globex = store.create_company("Globex").await.expect("Failed to create company").tn_id;

	let mut builder = AppBuilder::new();
	builder.trust_principal_headers(true).store_adapter(store);
	let app = builder.build().expect("Failed to build app");

	TestApp { router: routes::init(app), acme, globex }
}

#[derive(Clone, Copy)]
struct As<'a>(&'a str, &'a str, TnId);

fn client_user(tn_id: TnId) -> As<'static> {
	As("alice", "CLIENT_USER", tn_id)
}

fn client_admin(tn_id: TnId) -> As<'static> {
	As("bob", "CLIENT_ADMIN", tn_id)
}

fn staff() -> As<'static> {
	As("carol", "CCC_STAFF", TnId(0))
}

async fn call(router: &Router, method: Method, uri: &str, who: Option<As<'_>>, body: Option<Value>) -> (StatusCode, Value) {
	let mut req = Request::builder().method(method).uri(uri);
	if let Some(As(user, role, tn_id)) = who {
		req = req
			.header("x-portal-user", user)
			.header("x-portal-role", role)
			.header("x-portal-tenant", tn_id.to_string());
	}
	let req = match body {
		Some(body) => req
			.header("content-type", "application/json")
			.body(Body::from(body.to_string()))
			.expect("Failed to build request"),
		None => req.body(Body::empty()).expect("Failed to build request"),
	};

	let res = router.clone().oneshot(req).await.expect("Failed to call router");
	let status = res.status();
	let bytes = res.into_body().collect().await.expect("Failed to read body").to_bytes();
	let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
	(status, json)
}

async fn create_order(t: &TestApp, who: As<'_>, title: &str) -> String {
	let (status, body) =
		call(&t.router, Method::POST, "/api/projects", Some(who), Some(json!({ "kind": "ORDER", "title": title })))
			.await;
	assert_eq!(status, StatusCode::CREATED);
	body["data"]["id"].as_str().expect("project id").to_string()
}

#[tokio::test]
async fn test_missing_principal_is_unauthorized() {
	let t = test_app().await;

	let (status, body) = call(&t.router, Method::GET, "/api/projects", None, None).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(body["error"]["code"], "E-AUTH-UNAUTH");

	let (status, _) = call(&t.router, Method::GET, "/api/companies", None, None).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_principal_headers_rejected() {
	let t = test_app().await;

	let (status, _) =
		call(&t.router, Method::GET, "/api/projects", Some(As("alice", "ROOT", t.acme)), None).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_request_id_echoed() {
	let t = test_app().await;
	let req = Request::builder()
		.uri("/api/me/permissions")
		.header("x-request-id", "req-test-123")
		.header("x-portal-user", "alice")
		.header("x-portal-role", "CLIENT_USER")
		.header("x-portal-tenant", t.acme.to_string())
		.body(Body::empty())
		.expect("Failed to build request");

	let res = t.router.clone().oneshot(req).await.expect("Failed to call router");
	assert_eq!(res.status(), StatusCode::OK);
	assert_eq!(res.headers().get("x-request-id").and_then(|h| h.to_str().ok()), Some("req-test-123"));

	let bytes = res.into_body().collect().await.expect("Failed to read body").to_bytes();
	let body: Value = serde_json::from_slice(&bytes).expect("Failed to parse body");
	assert_eq!(body["reqId"], "req-test-123");
}

#[tokio::test]
async fn test_permissions_listing() {
	let t = test_app().await;

	let (status, body) =
		call(&t.router, Method::GET, "/api/me/permissions", Some(client_user(t.acme)), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["role"], "CLIENT_USER");
	assert_eq!(body["data"]["roleClass"], "client");
	let actions = body["data"]["actions"].as_array().expect("actions");
	assert!(actions.contains(&json!("order.view")));
	assert!(!actions.contains(&json!("invoice.void")));

	let (_, body) = call(&t.router, Method::GET, "/api/me/permissions", Some(staff()), None).await;
	let actions = body["data"]["actions"].as_array().expect("actions");
	assert!(actions.contains(&json!("order.update_status")));
	assert!(actions.contains(&json!("admin.view_all_tenants")));
}

#[tokio::test]
async fn test_companies_staff_only() {
	let t = test_app().await;

	let (status, body) =
		call(&t.router, Method::GET, "/api/companies", Some(client_admin(t.acme)), None).await;
	assert_eq!(status, StatusCode::FORBIDDEN);
	assert_eq!(body["error"]["code"], "E-AUTH-NOPERM");

	let (status, body) = call(&t.router, Method::GET, "/api/companies", Some(staff()), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_own_company() {
	let t = test_app().await;
	let uri = format!("/api/company?tenant={}", t.globex);

	let (status, body) = call(&t.router, Method::GET, &uri, Some(client_admin(t.acme)), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["name"], "Acme");

	let (_, body) = call(&t.router, Method::GET, &uri, Some(staff()), None).await;
	assert_eq!(body["data"]["name"], "Globex");
}

#[tokio::test]
async fn test_project_lifecycle() {
	let t = test_app().await;
	let alice = client_user(t.acme);
	let id = create_order(&t, alice, "Business cards").await;

	let (status, body) =
		call(&t.router, Method::GET, &format!("/api/projects/{}", id), Some(alice), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["status"], "EMPTY");
	assert_eq!(body["data"]["kind"], "ORDER");

	let (status, body) =
		call(&t.router, Method::GET, &format!("/api/projects/{}/transitions", id), Some(alice), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["targets"], json!(["IN_REVIEW"]));

	let status_uri = format!("/api/projects/{}/status", id);
	let (status, body) =
		call(&t.router, Method::PATCH, &status_uri, Some(alice), Some(json!({ "status": "IN_REVIEW" }))).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["status"], "IN_REVIEW");

	// staff reaches the project through the tenant override
	let staff_uri = format!("/api/projects/{}/status?tenant={}", id, t.acme);
	let (status, body) =
		call(&t.router, Method::PATCH, &staff_uri, Some(staff()), Some(json!({ "status": "NEEDS_ATTENTION" })))
			.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["status"], "NEEDS_ATTENTION");

	let (status, body) =
		call(&t.router, Method::GET, &format!("/api/projects/{}/transitions", id), Some(alice), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"]["targets"], json!([]));
}

#[tokio::test]
async fn test_illegal_transition() {
	let t = test_app().await;
	let alice = client_user(t.acme);
	let id = create_order(&t, alice, "Flyers").await;
	let status_uri = format!("/api/projects/{}/status", id);

	let (status, body) =
		call(&t.router, Method::PATCH, &status_uri, Some(alice), Some(json!({ "status": "ACTIVE" }))).await;
	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
	assert_eq!(body["error"]["code"], "E-FLOW-ILLEGAL");

	let (status, _) =
		call(&t.router, Method::PATCH, &status_uri, Some(alice), Some(json!({ "status": "ARCHIVED" }))).await;
	assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

	let (_, body) = call(&t.router, Method::GET, &format!("/api/projects/{}", id), Some(alice), None).await;
	assert_eq!(body["data"]["status"], "EMPTY");
}

#[tokio::test]
async fn test_cross_tenant_access() {
	let t = test_app().await;
	let id = create_order(&t, client_user(t.globex), "Mugs").await;

	// the requested tenant is ignored for clients
	let uri = format!("/api/projects/{}?tenant={}", id, t.globex);
	let (status, body) = call(&t.router, Method::GET, &uri, Some(client_admin(t.acme)), None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"]["code"], "E-CORE-NOTFOUND");

	let uri = format!("/api/projects?tenant={}", t.globex);
	let (status, body) = call(&t.router, Method::GET, &uri, Some(client_admin(t.acme)), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"], json!([]));

	let (status, body) = call(&t.router, Method::GET, &uri, Some(staff()), None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_validation() {
	let t = test_app().await;

	let (status, body) = call(
		&t.router,
		Method::POST,
		"/api/projects",
		Some(client_user(t.acme)),
		Some(json!({ "kind": "ORDER", "title": "  " })),
	)
	.await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"]["code"], "E-VAL-INVALID");

	let (status, _) =
		call(&t.router, Method::GET, "/api/projects?tenant=acme", Some(client_user(t.acme)), None).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

// vim: ts=4

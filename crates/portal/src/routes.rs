//! API routes

use axum::{
	middleware,
	routing::{get, patch},
	Router,
};
use tower_http::trace::TraceLayer;

use crate::prelude::*;
use portal_core::middleware::{check_perm, request_id, trusted_principal};
use portal_project::{handler, perm};
use portal_types::action::Action;

fn init_api() -> Router<App> {
	let project_router = Router::new()
		.route("/api/me/permissions", get(perm::get_permissions))
		.route("/api/company", get(handler::get_company))
		.route("/api/projects", get(handler::list_projects).post(handler::post_project))
		.route("/api/projects/{project_id}", get(handler::get_project))
		.route("/api/projects/{project_id}/transitions", get(handler::get_transitions))
		.route("/api/projects/{project_id}/status", patch(handler::patch_status));

	let staff_router = Router::new()
		.route("/api/companies", get(handler::list_companies))
		.route_layer(middleware::from_fn(check_perm(Action::AdminViewAllTenants)));

	Router::new().merge(project_router).merge(staff_router)
}

pub fn init(app: App) -> Router {
	init_api()
		.layer(middleware::from_fn_with_state(app.clone(), trusted_principal))
		.layer(middleware::from_fn(request_id))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4

//! Project and company endpoints
//!
//! Every handler takes the principal from [`Auth`] and the optional `tenant`
//! query parameter from [`RequestedTenant`]; the core services decide whether
//! the requested tenant is honored.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	Json,
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use portal_core::extract::{Auth, OptionalRequestId, RequestedTenant};
use portal_core::project;
use portal_types::store_adapter::{Company, Project, ProjectKind};
use portal_types::types::ApiResponse;
use portal_types::workflow::WorkflowState;

/// Request body for creating a project
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
	pub kind: ProjectKind,
	pub title: String,
}

/// Request body for a status change. The status is kept as a raw tag so an
/// unknown state is rejected with `UnknownState` (422), not as a malformed body.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
	pub status: String,
}

/// Response for the transition listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionsView {
	pub project_id: Box<str>,
	pub status: WorkflowState,
	pub targets: Vec<WorkflowState>,
}

/// GET /api/projects - Projects visible to the caller
pub async fn list_projects(
	State(app): State<App>,
	Auth(auth): Auth,
	RequestedTenant(requested_tn): RequestedTenant,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<Vec<Project>>>)> {
	let projects = project::list_projects(app.store.as_ref(), &auth, requested_tn).await?;

	let response = ApiResponse::new(projects).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// POST /api/projects - Open an order or a quote
pub async fn post_project(
	State(app): State<App>,
	Auth(auth): Auth,
	RequestedTenant(requested_tn): RequestedTenant,
	OptionalRequestId(req_id): OptionalRequestId,
	Json(req): Json<CreateProjectRequest>,
) -> ClResult<(StatusCode, Json<ApiResponse<Project>>)> {
	let project =
		project::create_project(app.store.as_ref(), &auth, requested_tn, req.kind, &req.title).await?;

	let response = ApiResponse::new(project).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/projects/{project_id}
pub async fn get_project(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
	RequestedTenant(requested_tn): RequestedTenant,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<Project>>)> {
	let project = project::get_project(app.store.as_ref(), &auth, requested_tn, &project_id).await?;

	let response = ApiResponse::new(project).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/projects/{project_id}/transitions - States the caller may move the project to
pub async fn get_transitions(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
	RequestedTenant(requested_tn): RequestedTenant,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<TransitionsView>>)> {
	let (project, targets) =
		project::project_targets(app.store.as_ref(), &auth, requested_tn, &project_id).await?;

	let view = TransitionsView {
		project_id: project.project_id,
		status: project.status,
		targets: targets.to_vec(),
	};
	let response = ApiResponse::new(view).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// PATCH /api/projects/{project_id}/status - Move the project to another workflow state
pub async fn patch_status(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
	RequestedTenant(requested_tn): RequestedTenant,
	OptionalRequestId(req_id): OptionalRequestId,
	Json(req): Json<StatusRequest>,
) -> ClResult<(StatusCode, Json<ApiResponse<Project>>)> {
	let to = req.status.parse::<WorkflowState>()?;

	let project = project::transition_project(
		app.store.as_ref(),
		&auth,
		requested_tn,
		&project_id,
		to,
		app.opts.max_transition_retries,
	)
	.await?;

	let response = ApiResponse::new(project).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/company - The caller's company (or the requested one for staff)
pub async fn get_company(
	State(app): State<App>,
	Auth(auth): Auth,
	RequestedTenant(requested_tn): RequestedTenant,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<Company>>)> {
	let company = project::get_company(app.store.as_ref(), &auth, requested_tn).await?;

	let response = ApiResponse::new(company).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/companies - All companies
pub async fn list_companies(
	State(app): State<App>,
	Auth(auth): Auth,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<Vec<Company>>>)> {
	let companies = project::list_companies(app.store.as_ref(), &auth).await?;

	let response = ApiResponse::new(companies).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4

//! Capability listing of the calling principal

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::prelude::*;
use portal_core::extract::{Auth, OptionalRequestId};
use portal_core::perm;
use portal_types::action::Action;
use portal_types::role::{Role, RoleClass};
use portal_types::types::ApiResponse;

/// Response for the capability listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsView {
	pub user_id: Box<str>,
	pub tn_id: TnId,
	pub role: Role,
	pub role_class: RoleClass,
	pub actions: Vec<Action>,
}

/// GET /api/me/permissions - Role, role class and allowed actions of the caller
pub async fn get_permissions(
	Auth(auth): Auth,
	OptionalRequestId(req_id): OptionalRequestId,
) -> ClResult<(StatusCode, Json<ApiResponse<PermissionsView>>)> {
	let view = PermissionsView {
		actions: perm::actions_for(auth.role),
		role_class: auth.role.class(),
		role: auth.role,
		tn_id: auth.tn_id,
		user_id: auth.user_id,
	};

	let response = ApiResponse::new(view).with_req_id(req_id.unwrap_or_default());
	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4

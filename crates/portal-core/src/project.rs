//! Project services
//!
//! Each service gates the action with the permission engine, scopes the
//! store access with tenant scoping and, for status changes, validates the
//! transition before anything is written.

use crate::prelude::*;
use crate::{perm, scope, workflow};
use portal_types::action::Action;
use portal_types::principal::Principal;
use portal_types::role::{Role, RoleClass};
use portal_types::store_adapter::{Company, CreateProject, Project, ProjectKind, StoreAdapter};
use portal_types::workflow::WorkflowState;

pub const MAX_TITLE_LENGTH: usize = 200;

/// Action required to open a project of the given kind.
///
/// Clients request quotes, staff issue them.
pub fn create_action(kind: ProjectKind, role: Role) -> Action {
	match (kind, role.class()) {
		(ProjectKind::Order, _) => Action::OrderCreate,
		(ProjectKind::Quote, RoleClass::Client) => Action::QuoteRequest,
		(ProjectKind::Quote, RoleClass::Staff) => Action::QuoteCreate,
	}
}

pub async fn create_project(
	store: &dyn StoreAdapter,
	principal: &Principal,
	requested_tn: Option<TnId>,
	kind: ProjectKind,
	title: &str,
) -> ClResult<Project> {
	perm::assert_can(principal.role, Action::ProjectCreate)?;
	perm::assert_can(principal.role, create_action(kind, principal.role))?;

	let title = title.trim();
	if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
		return Err(Error::ValidationError(format!(
			"title must be 1 to {} characters",
			MAX_TITLE_LENGTH
		)));
	}

	let tn_id = scope::scope_filter(principal, requested_tn);
	// the owning company must exist
	store.read_company(tn_id).await?;

	let project = store
		.create_project(tn_id, CreateProject { kind, title, created_by: principal.user_id.as_ref() })
		.await?;
	info!(
		subject = %principal.user_id,
		tenant = %tn_id,
		project = %project.project_id,
		kind = ?kind,
		"project created"
	);
	Ok(project)
}

pub async fn get_project(
	store: &dyn StoreAdapter,
	principal: &Principal,
	requested_tn: Option<TnId>,
	project_id: &str,
) -> ClResult<Project> {
	perm::assert_can(principal.role, Action::ProjectView)?;
	let tn_id = scope::scope_filter(principal, requested_tn);
	store.find_project(tn_id, project_id).await
}

pub async fn list_projects(
	store: &dyn StoreAdapter,
	principal: &Principal,
	requested_tn: Option<TnId>,
) -> ClResult<Vec<Project>> {
	perm::assert_can(principal.role, Action::ProjectView)?;
	store.list_projects(scope::scope_for_listing(principal, requested_tn)).await
}

/// The project together with the states the caller may move it to
pub async fn project_targets(
	store: &dyn StoreAdapter,
	principal: &Principal,
	requested_tn: Option<TnId>,
	project_id: &str,
) -> ClResult<(Project, &'static [WorkflowState])> {
	let project = get_project(store, principal, requested_tn, project_id).await?;
	let targets = workflow::valid_targets(project.status, principal.role);
	Ok((project, targets))
}

/// Moves a project to `to`.
///
/// Legality is checked against the state that is then used as the expected
/// state of the store's compare-and-swap. When another writer commits first,
/// the project is re-read and the check repeated against the new state, up to
/// `max_retries` times; after that `Error::Conflict` is returned. An illegal
/// transition never reaches the store.
pub async fn transition_project(
	store: &dyn StoreAdapter,
	principal: &Principal,
	requested_tn: Option<TnId>,
	project_id: &str,
	to: WorkflowState,
	max_retries: u32,
) -> ClResult<Project> {
	perm::assert_can(principal.role, Action::ProjectTransition)?;
	let tn_id = scope::scope_filter(principal, requested_tn);

	let mut retries = 0;
	loop {
		let current = store.find_project(tn_id, project_id).await?;
		let from = current.status;

		if let Err(err) = workflow::check_transition(from, to, principal.role) {
			warn!(
				subject = %principal.user_id,
				role = %principal.role,
				project = project_id,
				from = %from,
				to = %to,
				"illegal transition rejected"
			);
			return Err(err);
		}

		match store.write_state(tn_id, project_id, from, to).await {
			Ok(project) => {
				info!(
					subject = %principal.user_id,
					tenant = %tn_id,
					project = project_id,
					from = %from,
					to = %to,
					"project status changed"
				);
				return Ok(project);
			}
			Err(Error::Conflict) if retries < max_retries => {
				retries += 1;
				debug!(project = project_id, from = %from, retry = retries, "concurrent status change, re-checking");
			}
			Err(err) => return Err(err),
		}
	}
}

/// The principal's own company, or the requested one for override holders
pub async fn get_company(
	store: &dyn StoreAdapter,
	principal: &Principal,
	requested_tn: Option<TnId>,
) -> ClResult<Company> {
	perm::assert_can(principal.role, Action::CompanyView)?;
	store.read_company(scope::scope_filter(principal, requested_tn)).await
}

/// All companies; operator only
pub async fn list_companies(store: &dyn StoreAdapter, principal: &Principal) -> ClResult<Vec<Company>> {
	perm::assert_can(principal.role, Action::AdminViewAllTenants)?;
	store.list_companies().await
}


// vim: ts=4

//! Adapter that persists companies and trackable projects.
//!
//! Every method takes the tenant scope computed by the core's tenant scoping;
//! no method reads or writes a project without one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;
use crate::workflow::WorkflowState;

/// Scope of a listing query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TenantScope {
	Tenant(TnId),
	/// Every tenant, only produced for principals holding the cross-tenant override
	All,
}

impl TenantScope {
	pub fn includes(&self, tn_id: TnId) -> bool {
		match self {
			TenantScope::Tenant(scope) => *scope == tn_id,
			TenantScope::All => true,
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
	#[serde(rename = "id")]
	pub tn_id: TnId,
	pub name: Box<str>,
	pub created_at: Timestamp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectKind {
	Order,
	Quote,
}

/// A trackable entity carrying a workflow state
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	#[serde(rename = "id")]
	pub project_id: Box<str>,
	pub tn_id: TnId,
	pub kind: ProjectKind,
	pub title: Box<str>,
	pub status: WorkflowState,
	pub created_by: Box<str>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

#[derive(Debug)]
pub struct CreateProject<'a> {
	pub kind: ProjectKind,
	pub title: &'a str,
	pub created_by: &'a str,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Companies
	async fn create_company(&self, name: &str) -> ClResult<Company>;
	async fn read_company(&self, tn_id: TnId) -> ClResult<Company>;
	async fn list_companies(&self) -> ClResult<Vec<Company>>;

	/// # Projects
	/// Creates a project owned by `tn_id` in the initial workflow state
	async fn create_project(&self, tn_id: TnId, data: CreateProject<'_>) -> ClResult<Project>;

	/// Reads a project inside the given tenant scope.
	/// Returns `Error::NotFound` for projects of other tenants.
	async fn find_project(&self, tn_id: TnId, project_id: &str) -> ClResult<Project>;

	async fn list_projects(&self, scope: TenantScope) -> ClResult<Vec<Project>>;

	/// Compare-and-swap of the workflow state.
	///
	/// Writes `new_state` only if the stored state still equals `expected`,
	/// otherwise returns `Error::Conflict` and leaves the project untouched.
	async fn write_state(
		&self,
		tn_id: TnId,
		project_id: &str,
		expected: WorkflowState,
		new_state: WorkflowState,
	) -> ClResult<Project>;
}

// vim: ts=4

//! In-memory store adapter
//!
//! Implements the `StoreAdapter` trait over plain maps behind a
//! `parking_lot::RwLock`. Used by the development server and the test
//! suites; a database-backed adapter implements the same trait.
//!
//! # Multi-Tenancy
//!
//! Projects are stored in one map keyed by project id. Every lookup compares
//! the stored `tn_id` with the requested scope, and a project of another
//! tenant is reported exactly like a missing one (`Error::NotFound`).
//!
//! # Status writes
//!
//! `write_state` compares the stored state with the expected one and writes
//! the new state under the same write lock, so two writers racing from the
//! same state cannot both succeed.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use portal_types::prelude::*;
use portal_types::store_adapter::{Company, CreateProject, Project, StoreAdapter, TenantScope};
use portal_types::workflow::WorkflowState;

#[derive(Debug, Default)]
struct Inner {
	last_tn_id: u32,
	companies: BTreeMap<TnId, Company>,
	projects: HashMap<Box<str>, Project>,
}

#[derive(Debug, Default)]
pub struct StoreAdapterMemory {
	inner: RwLock<Inner>,
}

impl StoreAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}
}

fn new_project_id() -> Box<str> {
	format!("p1~{}", uuid::Uuid::new_v4().simple()).into()
}

#[async_trait]
impl StoreAdapter for StoreAdapterMemory {
	async fn create_company(&self, name: &str) -> ClResult<Company> {
		let name = name.trim();
		if name.is_empty() {
			return Err(Error::ValidationError("company name must not be empty".into()));
		}

		let mut inner = self.inner.write();
		inner.last_tn_id += 1;
		let company =
			Company { tn_id: TnId(inner.last_tn_id), name: name.into(), created_at: Timestamp::now() };
		inner.companies.insert(company.tn_id, company.clone());
		debug!(tenant = %company.tn_id, name = %company.name, "company created");
		Ok(company)
	}

	async fn read_company(&self, tn_id: TnId) -> ClResult<Company> {
		self.inner.read().companies.get(&tn_id).cloned().ok_or(Error::NotFound)
	}

	async fn list_companies(&self) -> ClResult<Vec<Company>> {
		Ok(self.inner.read().companies.values().cloned().collect())
	}

	async fn create_project(&self, tn_id: TnId, data: CreateProject<'_>) -> ClResult<Project> {
		let mut inner = self.inner.write();
		if !inner.companies.contains_key(&tn_id) {
			return Err(Error::NotFound);
		}

		let now = Timestamp::now();
		let project = Project {
			project_id: new_project_id(),
			tn_id,
			kind: data.kind,
			title: data.title.into(),
			status: WorkflowState::INITIAL,
			created_by: data.created_by.into(),
			created_at: now,
			updated_at: now,
		};
		inner.projects.insert(project.project_id.clone(), project.clone());
		trace!(tenant = %tn_id, project = %project.project_id, "project stored");
		Ok(project)
	}

	async fn find_project(&self, tn_id: TnId, project_id: &str) -> ClResult<Project> {
		self.inner
			.read()
			.projects
			.get(project_id)
			.filter(|project| project.tn_id == tn_id)
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn list_projects(&self, scope: TenantScope) -> ClResult<Vec<Project>> {
		let mut projects: Vec<Project> = self
			.inner
			.read()
			.projects
			.values()
			.filter(|project| scope.includes(project.tn_id))
			.cloned()
			.collect();
		projects.sort_by(|a, b| {
			(a.tn_id, a.created_at, &a.project_id).cmp(&(b.tn_id, b.created_at, &b.project_id))
		});
		Ok(projects)
	}

	async fn write_state(
		&self,
		tn_id: TnId,
		project_id: &str,
		expected: WorkflowState,
		new_state: WorkflowState,
	) -> ClResult<Project> {
		let mut inner = self.inner.write();
		let project = inner
			.projects
			.get_mut(project_id)
			.filter(|project| project.tn_id == tn_id)
			.ok_or(Error::NotFound)?;

		if project.status != expected {
			debug!(
				project = project_id,
				expected = %expected,
				actual = %project.status,
				"status compare-and-swap failed"
			);
			return Err(Error::Conflict);
		}

		project.status = new_state;
		project.updated_at = Timestamp::now();
		Ok(project.clone())
	}
}

// vim: ts=4

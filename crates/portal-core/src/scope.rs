//! Tenant scoping
//!
//! Computes the tenant every entity query or mutation is constrained to.
//! A requested tenant is honored only for principals holding the cross-tenant
//! override (`admin.view_all_tenants`); for everyone else it is ignored and
//! the principal's own tenant is used. Ignoring is silent: the result is
//! always a valid scope, never an error.

use crate::perm;
use crate::prelude::*;
use portal_types::action::Action;
use portal_types::principal::Principal;
use portal_types::role::Role;
use portal_types::store_adapter::TenantScope;

pub fn has_tenant_override(role: Role) -> bool {
	perm::can(role, Action::AdminViewAllTenants)
}

/// Effective tenant for a single-entity read or write
pub fn scope_filter(principal: &Principal, requested: Option<TnId>) -> TnId {
	match requested {
		Some(tn_id) if tn_id == principal.tn_id => tn_id,
		Some(tn_id) if has_tenant_override(principal.role) => {
			debug!(
				subject = %principal.user_id,
				own_tenant = %principal.tn_id,
				tenant = %tn_id,
				"cross-tenant scope"
			);
			tn_id
		}
		Some(tn_id) => {
			debug!(
				subject = %principal.user_id,
				role = %principal.role,
				own_tenant = %principal.tn_id,
				requested_tenant = %tn_id,
				"tenant override ignored"
			);
			principal.tn_id
		}
		None => principal.tn_id,
	}
}

/// Effective scope for listings.
///
/// Same as [`scope_filter`], except that an override holder who did not ask
/// for a specific tenant sees all tenants.
pub fn scope_for_listing(principal: &Principal, requested: Option<TnId>) -> TenantScope {
	if requested.is_none() && has_tenant_override(principal.role) {
		TenantScope::All
	} else {
		TenantScope::Tenant(scope_filter(principal, requested))
	}
}


// vim: ts=4

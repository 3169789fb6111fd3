//! Permission engine
//!
//! A static, total table from [`Action`] to the roles allowed to perform it.
//! Authorization is decided per action rather than per role, so a role can be
//! allowed some mutations of an entity and not others (a `CLIENT_ADMIN` may
//! approve a proof but not issue an invoice).
//!
//! | action                   | CLIENT_USER | CLIENT_ADMIN | CCC_STAFF |
//! |--------------------------|:-----------:|:------------:|:---------:|
//! | `order.view`             | x | x | x |
//! | `order.create`           | x | x | x |
//! | `order.update`           | x | x | x |
//! | `order.cancel`           |   | x | x |
//! | `order.update_status`    |   |   | x |
//! | `quote.view`             | x | x | x |
//! | `quote.request`          | x | x |   |
//! | `quote.create`           |   |   | x |
//! | `quote.approve`          |   | x |   |
//! | `artwork.view`           | x | x | x |
//! | `artwork.upload`         | x | x | x |
//! | `proof.view`             | x | x | x |
//! | `proof.upload`           |   |   | x |
//! | `proof.approve`          |   | x |   |
//! | `proof.request_changes`  | x | x |   |
//! | `invoice.view`           |   | x | x |
//! | `invoice.create`         |   |   | x |
//! | `invoice.void`           |   |   | x |
//! | `saved_product.view`     | x | x | x |
//! | `saved_product.edit`     |   | x | x |
//! | `project.view`           | x | x | x |
//! | `project.create`         | x | x | x |
//! | `project.transition`     | x | x | x |
//! | `user.view`              |   | x | x |
//! | `user.invite`            |   | x | x |
//! | `user.manage_roles`      |   | x | x |
//! | `company.view`           | x | x | x |
//! | `company.edit`           |   | x | x |
//! | `message.send`           | x | x | x |
//! | `admin.view_all_tenants` |   |   | x |
//! | `admin.manage_tenants`   |   |   | x |

use crate::prelude::*;
use portal_types::action::Action;
use portal_types::role::Role;

const EVERYONE: &[Role] = &[Role::ClientUser, Role::ClientAdmin, Role::CccStaff];
const CLIENTS: &[Role] = &[Role::ClientUser, Role::ClientAdmin];
const CLIENT_ADMIN: &[Role] = &[Role::ClientAdmin];
const CLIENT_ADMIN_AND_STAFF: &[Role] = &[Role::ClientAdmin, Role::CccStaff];
const STAFF: &[Role] = &[Role::CccStaff];

/// Roles allowed to perform `action`.
///
/// The match is exhaustive: a new [`Action`] variant does not compile until
/// it gets a row here.
pub const fn allowed_roles(action: Action) -> &'static [Role] {
	match action {
		Action::OrderView
		| Action::OrderCreate
		| Action::OrderUpdate
		| Action::QuoteView
		| Action::ArtworkView
		| Action::ArtworkUpload
		| Action::ProofView
		| Action::SavedProductView
		| Action::ProjectView
		| Action::ProjectCreate
		| Action::ProjectTransition
		| Action::CompanyView
		| Action::MessageSend => EVERYONE,

		Action::QuoteRequest | Action::ProofRequestChanges => CLIENTS,

		Action::QuoteApprove | Action::ProofApprove => CLIENT_ADMIN,

		Action::OrderCancel
		| Action::InvoiceView
		| Action::SavedProductEdit
		| Action::UserView
		| Action::UserInvite
		| Action::UserManageRoles
		| Action::CompanyEdit => CLIENT_ADMIN_AND_STAFF,

		Action::OrderUpdateStatus
		| Action::QuoteCreate
		| Action::ProofUpload
		| Action::InvoiceCreate
		| Action::InvoiceVoid
		| Action::AdminViewAllTenants
		| Action::AdminManageTenants => STAFF,
	}
}

/// The whole table, one row per action, for auditing and introspection
pub fn permission_table() -> impl Iterator<Item = (Action, &'static [Role])> {
	Action::ALL.into_iter().map(|action| (action, allowed_roles(action)))
}

pub fn can(role: Role, action: Action) -> bool {
	allowed_roles(action).contains(&role)
}

/// Checks a raw action tag. Tags outside the vocabulary are denied for every role.
pub fn can_tag(role: Role, tag: &str) -> bool {
	match tag.parse::<Action>() {
		Ok(action) => can(role, action),
		Err(_) => {
			debug!(role = %role, action = tag, "unknown action tag denied");
			false
		}
	}
}

/// Like [`can`], but fails with `Error::PermissionDenied` carrying role and action
pub fn assert_can(role: Role, action: Action) -> ClResult<()> {
	if can(role, action) {
		Ok(())
	} else {
		warn!(role = %role, action = %action, "permission denied");
		Err(Error::PermissionDenied { role, action })
	}
}

/// Every action `role` may perform, in vocabulary order
pub fn actions_for(role: Role) -> Vec<Action> {
	Action::ALL.into_iter().filter(|action| can(role, *action)).collect()
}


// vim: ts=4

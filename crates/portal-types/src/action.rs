//! Closed vocabulary of permission-checked actions.
//!
//! Each action has a stable dotted tag (`order.create`, `invoice.void`, ...).
//! Adding an action means adding a variant here, its tag in [`Action::as_str`]
//! and its row in the permission table of `portal-core`; the table is an
//! exhaustive match, so a missing row does not compile.

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Action {
	// Orders
	OrderView,
	OrderCreate,
	OrderUpdate,
	OrderCancel,
	/// Order-level status fields; project workflow moves are gated by
	/// `ProjectTransition` and the transition tables instead
	OrderUpdateStatus,
	// Quotes
	QuoteView,
	QuoteRequest,
	QuoteCreate,
	QuoteApprove,
	// Artwork and proofs
	ArtworkView,
	ArtworkUpload,
	ProofView,
	ProofUpload,
	ProofApprove,
	ProofRequestChanges,
	// Billing
	InvoiceView,
	InvoiceCreate,
	InvoiceVoid,
	// Saved products
	SavedProductView,
	SavedProductEdit,
	// Projects (trackable entities)
	ProjectView,
	ProjectCreate,
	ProjectTransition,
	// Users and company
	UserView,
	UserInvite,
	UserManageRoles,
	CompanyView,
	CompanyEdit,
	MessageSend,
	// Operator administration
	AdminViewAllTenants,
	AdminManageTenants,
}

impl Action {
	pub const ALL: [Action; 31] = [
		Action::OrderView,
		Action::OrderCreate,
		Action::OrderUpdate,
		Action::OrderCancel,
		Action::OrderUpdateStatus,
		Action::QuoteView,
		Action::QuoteRequest,
		Action::QuoteCreate,
		Action::QuoteApprove,
		Action::ArtworkView,
		Action::ArtworkUpload,
		Action::ProofView,
		Action::ProofUpload,
		Action::ProofApprove,
		Action::ProofRequestChanges,
		Action::InvoiceView,
		Action::InvoiceCreate,
		Action::InvoiceVoid,
		Action::SavedProductView,
		Action::SavedProductEdit,
		Action::ProjectView,
		Action::ProjectCreate,
		Action::ProjectTransition,
		Action::UserView,
		Action::UserInvite,
		Action::UserManageRoles,
		Action::CompanyView,
		Action::CompanyEdit,
		Action::MessageSend,
		Action::AdminViewAllTenants,
		Action::AdminManageTenants,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Action::OrderView => "order.view",
			Action::OrderCreate => "order.create",
			Action::OrderUpdate => "order.update",
			Action::OrderCancel => "order.cancel",
			Action::OrderUpdateStatus => "order.update_status",
			Action::QuoteView => "quote.view",
			Action::QuoteRequest => "quote.request",
			Action::QuoteCreate => "quote.create",
			Action::QuoteApprove => "quote.approve",
			Action::ArtworkView => "artwork.view",
			Action::ArtworkUpload => "artwork.upload",
			Action::ProofView => "proof.view",
			Action::ProofUpload => "proof.upload",
			Action::ProofApprove => "proof.approve",
			Action::ProofRequestChanges => "proof.request_changes",
			Action::InvoiceView => "invoice.view",
			Action::InvoiceCreate => "invoice.create",
			Action::InvoiceVoid => "invoice.void",
			Action::SavedProductView => "saved_product.view",
			Action::SavedProductEdit => "saved_product.edit",
			Action::ProjectView => "project.view",
			Action::ProjectCreate => "project.create",
			Action::ProjectTransition => "project.transition",
			Action::UserView => "user.view",
			Action::UserInvite => "user.invite",
			Action::UserManageRoles => "user.manage_roles",
			Action::CompanyView => "company.view",
			Action::CompanyEdit => "company.edit",
			Action::MessageSend => "message.send",
			Action::AdminViewAllTenants => "admin.view_all_tenants",
			Action::AdminManageTenants => "admin.manage_tenants",
		}
	}
}

impl std::fmt::Display for Action {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Action {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Action::ALL
			.into_iter()
			.find(|action| action.as_str() == s)
			.ok_or_else(|| Error::UnknownAction(s.into()))
	}
}


// vim: ts=4

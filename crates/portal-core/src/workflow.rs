//! Workflow state machine
//!
//! Two total transition tables, one per [`RoleClass`], indexed by the current
//! state. `CLIENT_USER` and `CLIENT_ADMIN` share the client table.
//!
//! | from            | client    | staff                                            |
//! |-----------------|-----------|--------------------------------------------------|
//! | EMPTY           | IN_REVIEW | IN_REVIEW, ACTIVE                                |
//! | IN_REVIEW       | ACTIVE    | ACTIVE, NEEDS_ATTENTION                          |
//! | ACTIVE          |           | IN_REVIEW, IN_PRODUCTION, NEEDS_ATTENTION, COMPLETED |
//! | IN_PRODUCTION   |           | ACTIVE, NEEDS_ATTENTION, COMPLETED               |
//! | NEEDS_ATTENTION |           | IN_REVIEW, ACTIVE, IN_PRODUCTION                 |
//! | COMPLETED       |           | ACTIVE                                           |
//!
//! Clients only move forward, up to `ACTIVE`. Production and fulfillment
//! states are controlled by staff only. There is no terminal state: staff may
//! reopen a completed project.

use crate::prelude::*;
use portal_types::role::{Role, RoleClass};
use portal_types::workflow::WorkflowState::{
	self, Active, Completed, InProduction, InReview, NeedsAttention,
};

const STATE_COUNT: usize = WorkflowState::ALL.len();

/// Reachable states for each source state, indexed by [`WorkflowState::index`]
#[derive(Debug)]
pub struct TransitionTable {
	class: RoleClass,
	targets: [&'static [WorkflowState]; STATE_COUNT],
}

static CLIENT_TABLE: TransitionTable = TransitionTable {
	class: RoleClass::Client,
	targets: [
		/* EMPTY */ &[InReview],
		/* IN_REVIEW */ &[Active],
		/* ACTIVE */ &[],
		/* IN_PRODUCTION */ &[],
		/* NEEDS_ATTENTION */ &[],
		/* COMPLETED */ &[],
	],
};

static STAFF_TABLE: TransitionTable = TransitionTable {
	class: RoleClass::Staff,
	targets: [
		/* EMPTY */ &[InReview, Active],
		/* IN_REVIEW */ &[Active, NeedsAttention],
		/* ACTIVE */ &[InReview, InProduction, NeedsAttention, Completed],
		/* IN_PRODUCTION */ &[Active, NeedsAttention, Completed],
		/* NEEDS_ATTENTION */ &[InReview, Active, InProduction],
		/* COMPLETED */ &[Active],
	],
};

impl TransitionTable {
	pub fn class(&self) -> RoleClass {
		self.class
	}

	pub fn targets(&self, from: WorkflowState) -> &'static [WorkflowState] {
		self.targets[from.index()]
	}

	/// Table lookup only; does not apply the self-transition rule
	pub fn contains(&self, from: WorkflowState, to: WorkflowState) -> bool {
		self.targets(from).contains(&to)
	}
}

pub fn transition_table(class: RoleClass) -> &'static TransitionTable {
	match class {
		RoleClass::Client => &CLIENT_TABLE,
		RoleClass::Staff => &STAFF_TABLE,
	}
}

/// States directly reachable from `from` for `role`. Empty is a valid answer.
pub fn valid_targets(from: WorkflowState, role: Role) -> &'static [WorkflowState] {
	transition_table(role.class()).targets(from)
}

pub fn can_transition(from: WorkflowState, to: WorkflowState, role: Role) -> bool {
	// a no-op is never a transition, whatever the tables say
	if from == to {
		return false;
	}
	transition_table(role.class()).contains(from, to)
}

/// Checks raw state tags; tags outside the vocabulary are never legal
pub fn can_transition_tags(from: &str, to: &str, role: Role) -> bool {
	match (from.parse::<WorkflowState>(), to.parse::<WorkflowState>()) {
		(Ok(from), Ok(to)) => can_transition(from, to, role),
		_ => false,
	}
}

/// Like [`can_transition`], but fails with `Error::IllegalTransition`
pub fn check_transition(from: WorkflowState, to: WorkflowState, role: Role) -> ClResult<()> {
	if can_transition(from, to, role) {
		Ok(())
	} else {
		Err(Error::IllegalTransition { from, to })
	}
}


// vim: ts=4

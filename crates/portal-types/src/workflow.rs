//! Workflow status of trackable entities (projects, orders, quotes).

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::prelude::*;

#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub enum WorkflowState {
	/// Initial state of every newly created entity
	#[default]
	Empty,
	InReview,
	Active,
	InProduction,
	NeedsAttention,
	Completed,
}

impl WorkflowState {
	pub const ALL: [WorkflowState; 6] = [
		WorkflowState::Empty,
		WorkflowState::InReview,
		WorkflowState::Active,
		WorkflowState::InProduction,
		WorkflowState::NeedsAttention,
		WorkflowState::Completed,
	];

	pub const INITIAL: WorkflowState = WorkflowState::Empty;

	pub const fn as_str(self) -> &'static str {
		match self {
			WorkflowState::Empty => "EMPTY",
			WorkflowState::InReview => "IN_REVIEW",
			WorkflowState::Active => "ACTIVE",
			WorkflowState::InProduction => "IN_PRODUCTION",
			WorkflowState::NeedsAttention => "NEEDS_ATTENTION",
			WorkflowState::Completed => "COMPLETED",
		}
	}

	/// Position in [`WorkflowState::ALL`], used to index transition tables
	pub const fn index(self) -> usize {
		self as usize
	}
}

impl std::fmt::Display for WorkflowState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for WorkflowState {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		WorkflowState::ALL
			.into_iter()
			.find(|state| state.as_str() == s)
			.ok_or_else(|| Error::UnknownState(s.into()))
	}
}


// vim: ts=4

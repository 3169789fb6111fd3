//! Error type shared by the portal crates.
//!
//! Decision functions (`can`, `scope_filter`, `can_transition`) never return
//! errors; these variants are produced by the services that act on their
//! answers, by the store adapters and by the HTTP layer.

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::action::Action;
use crate::role::Role;
use crate::workflow::WorkflowState;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("not found")]
	NotFound,

	#[error("permission denied: {role} may not perform {action}")]
	PermissionDenied { role: Role, action: Action },

	#[error("unknown action: {0}")]
	UnknownAction(Box<str>),

	#[error("unauthenticated")]
	Unauthorized,

	#[error("illegal transition: {from} -> {to}")]
	IllegalTransition { from: WorkflowState, to: WorkflowState },

	#[error("unknown state: {0}")]
	UnknownState(Box<str>),

	#[error("state changed concurrently")]
	Conflict,

	#[error("validation error: {0}")]
	ValidationError(String),

	#[error("configuration error: {0}")]
	ConfigError(String),

	#[error("internal error: {0}")]
	Internal(String),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	/// Stable machine-readable code sent to clients
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-CORE-NOTFOUND",
			Error::PermissionDenied { .. } | Error::UnknownAction(_) => "E-AUTH-NOPERM",
			Error::Unauthorized => "E-AUTH-UNAUTH",
			Error::IllegalTransition { .. } | Error::UnknownState(_) => "E-FLOW-ILLEGAL",
			Error::Conflict => "E-CORE-CONFLICT",
			Error::ValidationError(_) => "E-VAL-INVALID",
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => "E-SYS-INTERNAL",
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			// unknown actions are denied, never reported as malformed input
			Error::PermissionDenied { .. } | Error::UnknownAction(_) => StatusCode::FORBIDDEN,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::IllegalTransition { .. } | Error::UnknownState(_) => {
				StatusCode::UNPROCESSABLE_ENTITY
			}
			Error::Conflict => StatusCode::CONFLICT,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		let message = if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
			"internal server error".to_string()
		} else {
			self.to_string()
		};

		let body = json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4

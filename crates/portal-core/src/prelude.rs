pub use crate::app::App;
pub use portal_types::prelude::*;

// vim: ts=4

pub use portal_core::prelude::*;

// vim: ts=4

//! Project API handlers: listing, creation, status transitions and the
//! caller's capability list

pub mod handler;
pub mod perm;

mod prelude;

// vim: ts=4

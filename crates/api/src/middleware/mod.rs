//! Request extractors guarding the admin console.
//!
//! - [`auth::RequireAdmin`] -- Requires a live admin session token.

pub mod auth;

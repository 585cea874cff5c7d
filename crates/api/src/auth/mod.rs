//! Admin gate primitives.
//!
//! - [`session`] -- shared-secret check, session tokens and logout revocation.

pub mod session;

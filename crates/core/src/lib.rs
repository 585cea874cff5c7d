//! Domain rules for the Voltcom site.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! converts rows into these types and the `api` crate drives them.

pub mod category;
pub mod confirm;
pub mod contact;
pub mod error;
pub mod project;
pub mod review;
pub mod service;
pub mod settings;
pub mod toast;
pub mod types;

//! Shared response envelope types for API handlers.
//!
//! Reads answer `{ "data": ... }`. Admin mutations answer
//! `{ "data": ..., "toast": ... }` where `data` is the freshly re-read list
//! of the entity, so the console never patches its state locally.

use serde::Serialize;
use voltcom_core::toast::Toast;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "toast": Toast }` envelope for admin mutations.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub data: T,
    pub toast: Toast,
}

impl<T: Serialize> MutationResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            data,
            toast: Toast::success(message),
        }
    }
}

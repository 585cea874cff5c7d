pub mod admin_auth;
pub mod categories;
pub mod contact;
pub mod projects;
pub mod reviews;
pub mod services;
pub mod settings;
pub mod site;
pub mod submissions;

use serde::Deserialize;

/// `?confirm=true` on destructive admin requests.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

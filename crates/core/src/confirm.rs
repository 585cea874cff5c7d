//! Confirmation gate for destructive admin actions.

use crate::error::CoreError;

pub const CONFIRM_DELETE_PROJECT: &str = "Voulez-vous vraiment supprimer ce projet ?";
pub const CONFIRM_DELETE_REVIEW: &str = "Voulez-vous vraiment supprimer cet avis ?";
pub const CONFIRM_DELETE_SERVICE: &str = "Voulez-vous vraiment supprimer ce service ?";
pub const CONFIRM_DELETE_SUBMISSION: &str = "Voulez-vous vraiment supprimer cette demande ?";

/// Refuse the action unless the caller explicitly confirmed `prompt`.
pub fn require_confirmation(confirmed: bool, prompt: &str) -> Result<(), CoreError> {
    if confirmed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Confirmation required: {prompt}")))
    }
}

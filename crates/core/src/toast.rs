//! Transient admin notifications.
//!
//! Every admin mutation answers with a toast the console shows for a fixed
//! window and then dismisses on its own.

use std::time::Duration;

use serde::Serialize;

/// How long a toast stays on screen.
pub const TOAST_DISPLAY: Duration = Duration::from_secs(3);

pub const MSG_SESSION_ACTIVE: &str = "Session active";
pub const MSG_INVALID_CODE: &str = "Code invalide";
pub const MSG_LOGGED_OUT: &str = "Session terminée";
pub const MSG_PROJECT_PUBLISHED: &str = "Projet publié";
pub const MSG_PROJECT_UPDATED: &str = "Mise à jour OK";
pub const MSG_PROJECT_DELETED: &str = "Projet supprimé avec succès";
pub const MSG_IMAGE_READY: &str = "Image prête";
pub const MSG_CATEGORY_ADDED: &str = "Catégorie ajoutée";
pub const MSG_CATEGORY_DELETED: &str = "Catégorie supprimée";
pub const MSG_CATEGORY_INVALID: &str = "Nom invalide ou existant";
pub const MSG_CATEGORY_FORBIDDEN: &str = "Action interdite";
pub const MSG_CATEGORY_IN_USE: &str = "Utilisée par des projets";
pub const MSG_REVIEW_SAVED: &str = "Avis enregistré";
pub const MSG_REVIEW_DELETED: &str = "Avis supprimé";
pub const MSG_SERVICE_SAVED: &str = "Service enregistré";
pub const MSG_SERVICE_DELETED: &str = "Service supprimé";
pub const MSG_SUBMISSION_UPDATED: &str = "Demande mise à jour";
pub const MSG_SUBMISSION_DELETED: &str = "Demande supprimée";
pub const MSG_SETTINGS_SAVED: &str = "Paramètres enregistrés";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub dismiss_after_ms: u64,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            dismiss_after_ms: TOAST_DISPLAY.as_millis() as u64,
        }
    }

    /// Whether the toast is still on screen `elapsed` after it appeared.
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        elapsed < Duration::from_millis(self.dismiss_after_ms)
    }
}

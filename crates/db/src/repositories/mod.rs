pub mod category_repo;
pub mod contact_submission_repo;
pub mod project_repo;
pub mod review_repo;
pub mod service_repo;
pub mod settings_repo;

pub use category_repo::CategoryRepo;
pub use contact_submission_repo::ContactSubmissionRepo;
pub use project_repo::ProjectRepo;
pub use review_repo::ReviewRepo;
pub use service_repo::ServiceRepo;
pub use settings_repo::SettingsRepo;

pub mod category;
pub mod contact_submission;
pub mod project;
pub mod review;
pub mod service;
pub mod settings;

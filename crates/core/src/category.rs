//! Project category naming and deletion rules.

use crate::error::CoreError;

/// Synthetic "all projects" filter. Never stored, never deletable.
pub const ALL_CATEGORIES: &str = "TOUS";

pub const CATEGORY_RESIDENTIAL: &str = "RÉSIDENTIEL";
pub const CATEGORY_EV_STATION: &str = "VE·BORNE";
pub const CATEGORY_RENOVATION: &str = "RÉNOVATION";
pub const CATEGORY_UPGRADE: &str = "MISE AUX NORMES";

/// Categories seeded on a fresh database.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    CATEGORY_RESIDENTIAL,
    CATEGORY_EV_STATION,
    CATEGORY_RENOVATION,
    CATEGORY_UPGRADE,
];

/// Trim and upper-case a category name, refusing blanks and duplicates.
///
/// `existing` is the current stored set; the sentinel always counts as taken.
pub fn normalize_new_name<S: AsRef<str>>(raw: &str, existing: &[S]) -> Result<String, CoreError> {
    let name = raw.trim().to_uppercase();
    if name.is_empty() {
        return Err(CoreError::Validation("Category name must not be empty".into()));
    }
    if name == ALL_CATEGORIES || existing.iter().any(|c| c.as_ref() == name) {
        return Err(CoreError::Conflict(format!("Category '{name}' already exists")));
    }
    Ok(name)
}

/// Resolve the category a project is filed under to a stored name.
///
/// Same trim and upper-case rule as [`normalize_new_name`]. The sentinel and
/// unknown names are refused.
pub fn resolve_project_category<S: AsRef<str>>(raw: &str, stored: &[S]) -> Result<String, CoreError> {
    let name = raw.trim().to_uppercase();
    if name == ALL_CATEGORIES {
        return Err(CoreError::Validation(format!(
            "Projects cannot be filed under '{ALL_CATEGORIES}'"
        )));
    }
    stored
        .iter()
        .map(AsRef::as_ref)
        .find(|c| *c == name)
        .map(str::to_string)
        .ok_or_else(|| CoreError::Validation(format!("Unknown category '{name}'")))
}

/// Refuse to delete the sentinel or a category still used by projects.
pub fn ensure_deletable(name: &str, referencing_projects: i64) -> Result<(), CoreError> {
    if name == ALL_CATEGORIES {
        return Err(CoreError::Validation(format!(
            "Category '{ALL_CATEGORIES}' cannot be deleted"
        )));
    }
    if referencing_projects > 0 {
        return Err(CoreError::Conflict(format!(
            "Category '{name}' is used by {referencing_projects} project(s)"
        )));
    }
    Ok(())
}

/// Public listing: sentinel first, then the stored names in order.
pub fn with_sentinel(stored: Vec<String>) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(stored.into_iter().filter(|c| c != ALL_CATEGORIES))
        .collect()
}

/// Whether a project category passes the public filter.
pub fn matches_filter(project_category: &str, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) if f == ALL_CATEGORIES => true,
        Some(f) => f == project_category,
    }
}

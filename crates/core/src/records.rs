//! Read-only records dataset served alongside projects.
//!
//! The table is filled by an external ingestion job; only its name is
//! configurable here.

use crate::error::CoreError;

/// Table read by the records listing when none is configured.
pub const DEFAULT_RECORDS_TABLE: &str = "clients";

/// Maximum length of a configured table name.
pub const MAX_TABLE_NAME_LENGTH: usize = 64;

/// Validate a table name so it can be interpolated into SQL as a quoted
/// identifier: ASCII letters, digits and `_`, not starting with a digit.
pub fn validate_table_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Table name must not be empty".into(),
        ));
    }
    if name.len() > MAX_TABLE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Table name exceeds maximum length of {MAX_TABLE_NAME_LENGTH} characters"
        )));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CoreError::Validation(format!(
            "Table name '{name}' must not start with a digit"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CoreError::Validation(format!(
            "Table name '{name}' may only contain ASCII letters, digits and '_'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert!(validate_table_name(DEFAULT_RECORDS_TABLE).is_ok());
    }

    #[test]
    fn accepts_identifiers() {
        assert!(validate_table_name("flo_data_20k").is_ok());
        assert!(validate_table_name("_staging").is_ok());
    }

    #[test]
    fn rejects_injection_attempts() {
        assert!(validate_table_name("clients; DROP TABLE projects").is_err());
        assert!(validate_table_name("clients\"").is_err());
        assert!(validate_table_name("a-b").is_err());
    }

    #[test]
    fn rejects_empty_and_leading_digit() {
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("1clients").is_err());
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(MAX_TABLE_NAME_LENGTH + 1);
        assert!(validate_table_name(&name).is_err());
    }
}

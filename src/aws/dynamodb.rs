//! # DynamoDB Naming Rules
//!
//! Table and secondary index name rules:
//! <https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/HowItWorks.NamingRulesDataTypes.html>

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::{NamingError, NamingResult};

/// ASCII letters, digits, underscore, dot and hyphen
static TABLE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap());

/// ASCII letters, digits and underscore
static INDEX_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

/// Validates a DynamoDB table name.
///
/// Checks run in a fixed order: length within [3, 255], then the character
/// pattern.
pub fn validate_table_name(name: &str) -> NamingResult<()> {
    if name.len() < 3 || name.len() > 255 {
        return Err(NamingError::TableNameLength);
    }

    if !TABLE_NAME_REGEX.is_match(name) {
        return Err(NamingError::TableNameCharacters);
    }

    Ok(())
}

/// Validates a DynamoDB secondary index name.
///
/// Checks run in a fixed order: length within [1, 255], then the character
/// pattern.
pub fn validate_index_name(name: &str) -> NamingResult<()> {
    if name.is_empty() || name.len() > 255 {
        return Err(NamingError::IndexNameLength);
    }

    if !INDEX_NAME_REGEX.is_match(name) {
        return Err(NamingError::IndexNameCharacters);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        assert!(validate_table_name("validTableName").is_ok());
        assert!(validate_table_name("table_name-2.backup").is_ok());
        assert!(validate_table_name("abc").is_ok());
    }

    #[test]
    fn test_table_name_length_bounds() {
        assert_eq!(validate_table_name("ab"), Err(NamingError::TableNameLength));
        assert_eq!(
            validate_table_name(&"a".repeat(256)),
            Err(NamingError::TableNameLength)
        );
        assert!(validate_table_name(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_table_name_characters() {
        assert_eq!(
            validate_table_name("Invalid Table"),
            Err(NamingError::TableNameCharacters)
        );
        assert_eq!(
            validate_table_name("Invalid🫥"),
            Err(NamingError::TableNameCharacters)
        );
    }

    #[test]
    fn test_valid_index_names() {
        assert!(validate_index_name("validIndexName").is_ok());
        assert!(validate_index_name("a").is_ok());
    }

    #[test]
    fn test_index_name_length_bounds() {
        assert_eq!(validate_index_name(""), Err(NamingError::IndexNameLength));
        assert_eq!(
            validate_index_name(&"a".repeat(256)),
            Err(NamingError::IndexNameLength)
        );
        assert!(validate_index_name(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_index_name_characters() {
        assert_eq!(
            validate_index_name("Invalid Index"),
            Err(NamingError::IndexNameCharacters)
        );
        assert_eq!(
            validate_index_name("Invalid🫥"),
            Err(NamingError::IndexNameCharacters)
        );
        // Dots and hyphens are table-name characters, not index-name ones
        assert_eq!(
            validate_index_name("index.name"),
            Err(NamingError::IndexNameCharacters)
        );
        assert_eq!(
            validate_index_name("index-name"),
            Err(NamingError::IndexNameCharacters)
        );
    }
}

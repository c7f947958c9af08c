//! Field constraints shared by entity constructors and setters.
//!
//! # Responsibility
//! - Own the length bounds for names, categories and titles.
//! - Classify failures into the two error kinds exposed by core.
//!
//! # Invariants
//! - Lengths are measured in characters, not bytes.
//! - Every `ValidationError` is a value-kind failure.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum author name length in characters.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Inclusive magazine name bounds in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum magazine category length in characters.
pub const CATEGORY_MIN_CHARS: usize = 1;
/// Inclusive article title bounds in characters.
pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

/// Coarse classification of core errors.
///
/// `Type` means an argument does not refer to the required kind of entity.
/// `Value` means the argument has the right kind but violates a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
}

/// Constraint violations raised by entity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name has zero characters.
    EmptyAuthorName,
    /// Magazine name falls outside the allowed character range.
    MagazineNameLength { chars: usize },
    /// Magazine category has zero characters.
    EmptyCategory,
    /// Article title falls outside the allowed character range.
    TitleLength { chars: usize },
    /// Externally supplied id is the nil uuid.
    NilId,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { chars } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and {MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { chars } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters, got {chars}"
            ),
            Self::NilId => write!(f, "entity id must not be nil"),
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn validate_author_name(name: &str) -> ValidationResult<()> {
    if char_len(name) < AUTHOR_NAME_MIN_CHARS {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> ValidationResult<()> {
    let chars = char_len(name);
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::MagazineNameLength { chars });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> ValidationResult<()> {
    if char_len(category) < CATEGORY_MIN_CHARS {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> ValidationResult<()> {
    let chars = char_len(title);
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::TitleLength { chars });
    }
    Ok(())
}

pub(crate) fn validate_id(id: Uuid) -> ValidationResult<()> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        char_len, validate_category, validate_magazine_name, validate_title, ErrorKind,
        ValidationError,
    };

    #[test]
    fn char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!("héllo".len(), 6);
    }

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(validate_magazine_name("ab").is_ok());
        assert!(validate_magazine_name("abcdefghijklmnop").is_ok());
        assert_eq!(
            validate_magazine_name("a").expect_err("1 char must fail"),
            ValidationError::MagazineNameLength { chars: 1 }
        );
        assert_eq!(
            validate_magazine_name("abcdefghijklmnopq").expect_err("17 chars must fail"),
            ValidationError::MagazineNameLength { chars: 17 }
        );
    }

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(validate_title("abcde").is_ok());
        assert!(validate_title(&"x".repeat(50)).is_ok());
        assert!(validate_title("abcd").is_err());
        assert!(validate_title(&"x".repeat(51)).is_err());
    }

    #[test]
    fn category_rejects_empty_only() {
        assert!(validate_category("x").is_ok());
        assert_eq!(
            validate_category("").expect_err("empty must fail"),
            ValidationError::EmptyCategory
        );
    }

    #[test]
    fn validation_errors_are_value_kind() {
        assert_eq!(ValidationError::EmptyAuthorName.kind(), ErrorKind::Value);
        assert_eq!(ValidationError::TitleLength { chars: 3 }.kind(), ErrorKind::Value);
    }

    #[test]
    fn messages_include_bounds_and_actual_length() {
        let message = ValidationError::TitleLength { chars: 51 }.to_string();
        assert!(message.contains("between 5 and 50"), "unexpected: {message}");
        assert!(message.contains("51"), "unexpected: {message}");
    }
}

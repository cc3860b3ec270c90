//! # Identifier Rules
//!
//! Shape and property names become type and member names of synthesized
//! shapes, and shape names also key files in the declaration store, so both
//! are restricted to identifier characters: an ASCII letter or `_`, followed
//! by ASCII letters, digits or `_`. Whitespace in a name is always malformed.

use crate::error::ValidationError;
use crate::primitive::Primitive;

/// Longest accepted name.
pub const MAX_NAME_LEN: usize = 128;

/// Check that `name` is a usable identifier.
pub fn validate_identifier(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let valid_head = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_head || !valid_tail || name.len() > MAX_NAME_LEN {
        return Err(ValidationError::MalformedName(name.to_string()));
    }
    Ok(())
}

/// Check that `name` can name a new shape: a valid identifier that does not
/// shadow a built-in type.
pub fn validate_shape_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyField("name"));
    }
    validate_identifier(name)?;
    if Primitive::resolve(name).is_some() {
        return Err(ValidationError::ReservedName(name.to_string()));
    }
    Ok(())
}

/// Case-insensitive lookup key for a shape name.
pub fn name_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_identifiers() {
        assert!(validate_identifier("Data1").is_ok());
        assert!(validate_identifier("_private").is_ok());
        assert!(validate_identifier("IntegerValue").is_ok());
    }

    #[test]
    fn rejects_whitespace_and_punctuation() {
        assert!(validate_identifier("Integer Value").is_err());
        assert!(validate_identifier(" Leading").is_err());
        assert!(validate_identifier("1Data").is_err());
        assert!(validate_identifier("../escape").is_err());
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "A".repeat(MAX_NAME_LEN + 1);
        assert!(validate_identifier(&name).is_err());
    }

    #[test]
    fn shape_name_may_not_shadow_builtins() {
        assert_eq!(
            validate_shape_name("String"),
            Err(ValidationError::ReservedName("String".into()))
        );
        assert_eq!(
            validate_shape_name("int"),
            Err(ValidationError::ReservedName("int".into()))
        );
        assert_eq!(validate_shape_name(""), Err(ValidationError::EmptyField("name")));
        assert!(validate_shape_name("Customer").is_ok());
    }

    #[test]
    fn name_key_folds_case() {
        assert_eq!(name_key("Data1"), name_key("DATA1"));
    }

    proptest! {
        /// Any name containing whitespace is malformed.
        #[test]
        fn whitespace_is_never_accepted(head in "[A-Za-z]{1,8}", tail in "[A-Za-z0-9]{0,8}") {
            let name = format!("{head} {tail}");
            prop_assert!(validate_identifier(&name).is_err());
        }
    }
}

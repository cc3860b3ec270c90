//! # Visibility: Ordered Access Levels
//!
//! The four access levels a shape, a property, or a property accessor can
//! carry. The variants are declared narrowest first so the derived `Ord`
//! gives the total order `private < protected < internal < public`, and the
//! "accessor may not be wider than its property" rule is a plain comparison.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Access level of a shape, property, or accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Visibility {
    /// Visible only inside the declaring shape.
    Private,
    /// Visible to the declaring shape and shapes derived from it.
    Protected,
    /// Visible within the same type universe.
    Internal,
    /// Visible everywhere.
    Public,
}

impl Visibility {
    /// All levels, narrowest first.
    pub const ALL: [Visibility; 4] = [
        Self::Private,
        Self::Protected,
        Self::Internal,
        Self::Public,
    ];

    /// Normalized lowercase name, as written in documents and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Public => "public",
        }
    }

    /// Decode an optional accessor visibility.
    ///
    /// An empty (or all-whitespace) string means the accessor is absent and
    /// yields `Ok(None)`. Anything else must name a level.
    pub fn parse_accessor(raw: &str) -> Result<Option<Self>, ValidationError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }

    /// Whether a caller positioned at `scope` may use a member declared
    /// with this visibility.
    ///
    /// `scope` is the narrowest level the caller can see: code inside the
    /// shape passes `Private` and sees everything, outside code passes
    /// `Public` and sees only public members.
    pub fn admits(&self, scope: Visibility) -> bool {
        *self >= scope
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Public
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(Self::Private),
            "protected" => Ok(Self::Protected),
            "internal" => Ok(Self::Internal),
            "public" => Ok(Self::Public),
            _ => Err(ValidationError::UnknownVisibility(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ordering_is_narrowest_first() {
        assert!(Visibility::Private < Visibility::Protected);
        assert!(Visibility::Protected < Visibility::Internal);
        assert!(Visibility::Internal < Visibility::Public);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PUBLIC".parse::<Visibility>().unwrap(), Visibility::Public);
        assert_eq!("Protected".parse::<Visibility>().unwrap(), Visibility::Protected);
        assert_eq!(" internal ".parse::<Visibility>().unwrap(), Visibility::Internal);
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert!("friend".parse::<Visibility>().is_err());
        assert!("".parse::<Visibility>().is_err());
        assert!("protected internal".parse::<Visibility>().is_err());
    }

    #[test]
    fn empty_accessor_is_absent() {
        assert_eq!(Visibility::parse_accessor("").unwrap(), None);
        assert_eq!(Visibility::parse_accessor("   ").unwrap(), None);
        assert_eq!(
            Visibility::parse_accessor("private").unwrap(),
            Some(Visibility::Private)
        );
        assert!(Visibility::parse_accessor("sealed").is_err());
    }

    #[test]
    fn admits_follows_scope() {
        assert!(Visibility::Public.admits(Visibility::Public));
        assert!(!Visibility::Internal.admits(Visibility::Public));
        assert!(Visibility::Private.admits(Visibility::Private));
        assert!(Visibility::Public.admits(Visibility::Private));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Visibility::Protected).unwrap();
        assert_eq!(json, "\"protected\"");
        let back: Visibility = serde_json::from_str("\"internal\"").unwrap();
        assert_eq!(back, Visibility::Internal);
    }

    fn any_visibility() -> impl Strategy<Value = Visibility> {
        prop::sample::select(Visibility::ALL.to_vec())
    }

    proptest! {
        /// The display name always parses back to the same level.
        #[test]
        fn display_parses_back(v in any_visibility()) {
            prop_assert_eq!(v.to_string().parse::<Visibility>().unwrap(), v);
        }

        /// `admits` agrees with the total order.
        #[test]
        fn admits_matches_order(a in any_visibility(), b in any_visibility()) {
            prop_assert_eq!(a.admits(b), a >= b);
        }
    }
}

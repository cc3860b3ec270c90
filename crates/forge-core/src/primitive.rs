//! # Built-in Type Universe
//!
//! The primitive types a property can be declared with, and the alias table
//! that normalizes keyword spellings (`int`, `float`, `ulong`, ...) to their
//! canonical type names (`Int32`, `Single`, `UInt64`, ...). Lookup is
//! case-insensitive on both the keyword and the canonical name, so `int`,
//! `Int32` and `INT32` all resolve to [`Primitive::Int32`].

use serde::{Deserialize, Serialize};

/// A built-in property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    IntPtr,
    UIntPtr,
    Single,
    Double,
    Decimal,
    Char,
    String,
    Object,
    DateTime,
    Guid,
}

impl Primitive {
    /// Every built-in type.
    pub const ALL: [Primitive; 19] = [
        Self::Boolean,
        Self::Byte,
        Self::SByte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::IntPtr,
        Self::UIntPtr,
        Self::Single,
        Self::Double,
        Self::Decimal,
        Self::Char,
        Self::String,
        Self::Object,
        Self::DateTime,
        Self::Guid,
    ];

    /// Canonical type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::SByte => "SByte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::IntPtr => "IntPtr",
            Self::UIntPtr => "UIntPtr",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Char => "Char",
            Self::String => "String",
            Self::Object => "Object",
            Self::DateTime => "DateTime",
            Self::Guid => "Guid",
        }
    }

    /// Keyword alias, where the type has one.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("bool"),
            Self::Byte => Some("byte"),
            Self::SByte => Some("sbyte"),
            Self::Int16 => Some("short"),
            Self::UInt16 => Some("ushort"),
            Self::Int32 => Some("int"),
            Self::UInt32 => Some("uint"),
            Self::Int64 => Some("long"),
            Self::UInt64 => Some("ulong"),
            Self::IntPtr => Some("nint"),
            Self::UIntPtr => Some("nuint"),
            Self::Single => Some("float"),
            Self::Double => Some("double"),
            Self::Decimal => Some("decimal"),
            Self::Char => Some("char"),
            Self::String => Some("string"),
            Self::Object => Some("object"),
            Self::DateTime | Self::Guid => None,
        }
    }

    /// The spelling used in documents and listings: the keyword when there
    /// is one, otherwise the canonical type name.
    pub fn display_name(&self) -> &'static str {
        self.keyword().unwrap_or_else(|| self.type_name())
    }

    /// Resolve a declared type name against the built-in universe.
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|p| {
            p.type_name().eq_ignore_ascii_case(name)
                || p.keyword().is_some_and(|k| k.eq_ignore_ascii_case(name))
        })
    }

    /// Whether members of this type default to null.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::String | Self::Object)
    }

    /// Inclusive value range for the signed integer types.
    pub fn signed_range(&self) -> Option<(i64, i64)> {
        match self {
            Self::SByte => Some((i8::MIN.into(), i8::MAX.into())),
            Self::Int16 => Some((i16::MIN.into(), i16::MAX.into())),
            Self::Int32 => Some((i32::MIN.into(), i32::MAX.into())),
            Self::Int64 | Self::IntPtr => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }

    /// Inclusive upper bound for the unsigned integer types.
    pub fn unsigned_max(&self) -> Option<u64> {
        match self {
            Self::Byte => Some(u8::MAX.into()),
            Self::UInt16 => Some(u16::MAX.into()),
            Self::UInt32 => Some(u32::MAX.into()),
            Self::UInt64 | Self::UIntPtr => Some(u64::MAX),
            _ => None,
        }
    }

    /// Whether this is one of the floating-point/decimal types.
    pub fn is_fractional(&self) -> bool {
        matches!(self, Self::Single | Self::Double | Self::Decimal)
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_aliases_normalize() {
        assert_eq!(Primitive::resolve("int"), Some(Primitive::Int32));
        assert_eq!(Primitive::resolve("short"), Some(Primitive::Int16));
        assert_eq!(Primitive::resolve("long"), Some(Primitive::Int64));
        assert_eq!(Primitive::resolve("float"), Some(Primitive::Single));
        assert_eq!(Primitive::resolve("uint"), Some(Primitive::UInt32));
        assert_eq!(Primitive::resolve("ulong"), Some(Primitive::UInt64));
        assert_eq!(Primitive::resolve("ushort"), Some(Primitive::UInt16));
        assert_eq!(Primitive::resolve("nint"), Some(Primitive::IntPtr));
        assert_eq!(Primitive::resolve("nuint"), Some(Primitive::UIntPtr));
        assert_eq!(Primitive::resolve("bool"), Some(Primitive::Boolean));
    }

    #[test]
    fn canonical_names_resolve_case_insensitively() {
        assert_eq!(Primitive::resolve("Int32"), Some(Primitive::Int32));
        assert_eq!(Primitive::resolve("string"), Some(Primitive::String));
        assert_eq!(Primitive::resolve("STRING"), Some(Primitive::String));
        assert_eq!(Primitive::resolve("datetime"), Some(Primitive::DateTime));
        assert_eq!(Primitive::resolve("Guid"), Some(Primitive::Guid));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(Primitive::resolve("not_a_type"), None);
        assert_eq!(Primitive::resolve(""), None);
        assert_eq!(Primitive::resolve("Int128"), None);
    }

    #[test]
    fn display_prefers_keyword() {
        assert_eq!(Primitive::Int32.display_name(), "int");
        assert_eq!(Primitive::Single.display_name(), "float");
        assert_eq!(Primitive::Guid.display_name(), "Guid");
    }

    #[test]
    fn display_name_resolves_back() {
        for p in Primitive::ALL {
            assert_eq!(Primitive::resolve(p.display_name()), Some(p));
        }
    }

    #[test]
    fn integer_ranges() {
        assert_eq!(Primitive::Int16.signed_range(), Some((-32768, 32767)));
        assert_eq!(Primitive::Byte.unsigned_max(), Some(255));
        assert_eq!(Primitive::String.signed_range(), None);
    }
}

//! # forge-core: Foundational Types for Class Forge
//!
//! The vocabulary shared by every other crate in the workspace:
//!
//! - [`Visibility`]: the ordered access levels.
//! - [`ShapeKind`]: class, struct, record or interface.
//! - [`Primitive`]: the built-in type universe and its keyword aliases.
//! - [`ident`]: identifier rules for shape and property names.
//! - [`ObjectDataDto`] / [`PropertyDataDto`]: the wire form of a declaration.
//! - [`ClassDocument`] / [`PropertyDocument`]: the canonical persisted form.
//! - [`ValidationError`]: why a declaration was rejected.
//!
//! This crate performs no I/O.

pub mod document;
pub mod dto;
pub mod error;
pub mod ident;
pub mod kind;
pub mod primitive;
pub mod visibility;

pub use document::{ClassDocument, PropertyDocument};
pub use dto::{ObjectDataDto, PropertyDataDto};
pub use error::{Accessor, ValidationError};
pub use ident::{name_key, validate_identifier, validate_shape_name};
pub use kind::ShapeKind;
pub use primitive::Primitive;
pub use visibility::Visibility;

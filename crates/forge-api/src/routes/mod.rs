//! # API Route Modules
//!
//! - [`objects`]: shape declarations, instances and listings.

pub mod objects;

//! # Readable Listing
//!
//! Deterministic source-style rendering of a canonical document, written
//! next to it as `<name>.cs`:
//!
//! ```text
//! public class Data2
//! {
//!     public string StringValue { get; }
//! }
//! ```
//!
//! An accessor carries its own modifier only when it differs from the
//! property's. A read-only property renders without `set;`.

use forge_core::{ClassDocument, PropertyDocument};

/// File extension of the readable listing.
pub const LISTING_EXTENSION: &str = "cs";

/// Render the listing for `doc`.
pub fn render(doc: &ClassDocument) -> String {
    let mut out = format!("{} {} {}\n{{\n", doc.access_modifier, doc.data_type, doc.name);
    for prop in &doc.properties {
        out.push_str("    ");
        out.push_str(&render_property(prop));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn render_property(prop: &PropertyDocument) -> String {
    let mut accessors = String::new();
    for (keyword, modifier) in [
        ("get", prop.getter_access_modifier),
        ("set", prop.setter_access_modifier),
    ] {
        let Some(modifier) = modifier else { continue };
        if modifier != prop.access_modifier {
            accessors.push_str(modifier.as_str());
            accessors.push(' ');
        }
        accessors.push_str(keyword);
        accessors.push_str("; ");
    }
    format!(
        "{} {} {} {{ {}}}",
        prop.access_modifier, prop.property_type, prop.name, accessors
    )
}

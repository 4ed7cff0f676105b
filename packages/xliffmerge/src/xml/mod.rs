//! XML Module
//!
//! Document tree, parser (on top of quick-xml) and serializer used by the
//! translation file dialects.

pub mod ast;
pub mod parser;
pub mod serializer;

pub use ast::{Declaration, Document, Element, Node, Text};
pub use parser::{parse_document, parse_fragment};
pub use serializer::{serialize, serialize_document, serialize_node};

/// Escape special XML characters (attribute values)
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape the characters that may not appear literally in text content
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Resolve the predefined entities and character references.
///
/// Unknown entities are kept as written.
pub fn unescape_xml(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        let resolved = after.find(';').and_then(|semi| {
            let entity = &after[1..semi];
            resolve_entity(entity).map(|c| (c, semi + 1))
        });
        match resolved {
            Some((c, consumed)) => {
                out.push(c);
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

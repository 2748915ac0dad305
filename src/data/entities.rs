//! HTML character references
//!
//! Named references resolve through the full HTML5 table shipped with
//! `quick-xml`; numeric references are decoded here.

use quick_xml::escape::resolve_html5_entity;

/// Decode a character reference body (`amp`, `#38`, `#x26`).
///
/// Returns `None` when the reference is unknown or the code point is invalid.
pub fn decode_reference(name: &str) -> Option<String> {
    if let Some(numeric) = name.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    resolve_html5_entity(name).map(String::from)
}

//! `application/x-www-form-urlencoded` request bodies.

use percent_encoding::percent_decode_str;

use crate::types::FormValues;

/// Decode a form body into ordered name/value pairs.
///
/// `+` decodes to a space and percent escapes to their bytes; invalid UTF-8
/// is replaced rather than rejected. Empty segments are dropped and a
/// segment without `=` is a name with an empty value.
pub fn parse_urlencoded(body: &str) -> FormValues {
    body.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(name), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

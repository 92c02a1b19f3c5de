//! Query component decoding and encoding.

use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// Form-decodes one key or value: `+` becomes a space, then percent escapes
/// are decoded. Invalid UTF-8 is replaced rather than rejected.
pub(super) fn decode_component(raw: &str) -> String {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
    } else {
        percent_decode_str(raw).decode_utf8_lossy().into_owned()
    }
}

/// Form-encodes one key or value (`application/x-www-form-urlencoded`).
pub(crate) fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Splits one `&`-separated token into key and optional raw value.
///
/// Returns `None` for empty tokens (`a=1&&b=2`).
pub(super) fn split_pair(token: &str) -> Option<(&str, Option<&str>)> {
    if token.is_empty() {
        return None;
    }
    match token.split_once('=') {
        Some((k, v)) => Some((k, Some(v))),
        None => Some((token, None)),
    }
}

//! Query string parsing
//!
//! `application/x-www-form-urlencoded` decoding: `+` is a space and `%XX`
//! sequences are percent-decoded. Invalid UTF-8 is replaced lossily.

use percent_encoding::percent_decode_str;

/// Value of the first `name` parameter in a raw query string
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode(key) == name)
        .map(|(_, value)| decode(value))
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

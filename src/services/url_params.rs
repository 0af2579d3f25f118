//! Query-string helpers shared by the dispatcher and the tab session.

use url::form_urlencoded;

/// Appends an encoded parameter string to `url`.
///
/// Uses `?` or `&` depending on whether the url already has a query and keeps
/// any `#fragment` at the end. Empty params leave the url untouched.
pub fn set_url_params(url: &str, params: &str) -> String {
    let params = params.trim_start_matches(|c: char| c == '?' || c == '&');
    if params.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.find('#') {
        Some(pos) => (&url[..pos], &url[pos..]),
        None => (url, ""),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    format!("{}{}{}{}", base, separator, params, fragment)
}

/// Encodes repeated `field=value` pairs, preserving value order.
pub fn encode_pairs<'a, I>(field: &str, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for value in values {
        serializer.append_pair(field, value);
    }
    serializer.finish()
}

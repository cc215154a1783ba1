use std::borrow::Cow;

use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::EncodingError;

// RFC 3986 unreserved characters are left as is: ALPHA / DIGIT / "-" / "." / "_" / "~"
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` as OAuth 1.0 requires (RFC 5849 section 3.6).
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `+` is read as a space before percent sequences are resolved.
pub fn form_decode(input: &str) -> Result<String, EncodingError> {
    let replaced: Cow<str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_decode(replaced.as_bytes())
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| EncodingError::Utf8 {
            context: "unescaped response value",
        })
}

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::encode::percent_encode;
use crate::OrderedParams;

type HmacSha1 = Hmac<Sha1>;

const AUTHORIZATION_SCHEME: &str = "OAuth ";

/// Builds the signature base string `METHOD&url&parameters`.
///
/// Each parameter is rendered as `key=value` with its key encoded here and its
/// value taken as already encoded by [`OrderedParams::add`]. The joined
/// parameter block is then encoded as one unit, so every `&` between pairs
/// appears as `%26`.
pub fn base_string(method: &str, url: &str, params: &OrderedParams) -> String {
    let normalized_params = params
        .sorted_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), value))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(url),
        percent_encode(&normalized_params)
    )
}

/// Builds the HMAC-SHA1 key `consumer_secret&token_secret`.
///
/// The token secret is empty while requesting a request token.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    )
}

/// Signs `base_string` with HMAC-SHA1 and returns the base64 encoded digest.
pub fn sign(base_string: &str, signing_key: &str) -> String {
    // HMAC accepts keys of any length
    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Renders the `Authorization` header value for `params`.
///
/// `OAuth k1="v1",k2="v2",...` with keys in ascending order. Keys are
/// encoded the same way as in the base string.
pub fn authorization_header(params: &OrderedParams) -> String {
    let pairs = params
        .sorted_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), value))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{}", AUTHORIZATION_SCHEME, pairs)
}

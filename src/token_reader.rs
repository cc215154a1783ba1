use std::collections::HashMap;

use serde::Deserialize;

use crate::encode::form_decode;
use crate::{
    EncodingError, ResponseFormatError, TokenReaderError, TokenReaderResult,
    OAUTH_CALLBACK_CONFIRMED_KEY, OAUTH_TOKEN_KEY, OAUTH_TOKEN_SECRET_KEY,
};

/// Represents the unauthorized request token issued by the Service Provider.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedToken {
    /// OAuth Token
    #[serde(rename = "oauth_token")]
    pub token: String,
    /// OAuth Token Secret
    #[serde(rename = "oauth_token_secret")]
    pub token_secret: String,
    /// Other contents
    #[serde(flatten)]
    pub remain: HashMap<String, String>,
}

impl UnauthorizedToken {
    /// Whether the provider acknowledged the `oauth_callback` (OAuth 1.0a).
    pub fn callback_confirmed(&self) -> bool {
        self.remain
            .get(OAUTH_CALLBACK_CONFIRMED_KEY)
            .map_or(false, |v| v == "true")
    }
}

/// Parses an `application/x-www-form-urlencoded` token response.
///
/// Keys and values are unescaped. Both `oauth_token` and
/// `oauth_token_secret` must appear exactly once.
pub fn read_request_token(body: &[u8]) -> TokenReaderResult<UnauthorizedToken> {
    let text = std::str::from_utf8(body)
        .map_err(|_| EncodingError::Utf8 {
            context: "response body",
        })?
        .trim();

    let mut token = None;
    let mut token_secret = None;
    let mut remain = HashMap::new();
    for pair in text.split('&').filter(|p| !p.is_empty()) {
        let mut iter = pair.splitn(2, '=');
        let key = form_decode(iter.next().unwrap_or_default())?;
        let value = form_decode(iter.next().unwrap_or_default())?;
        match key.as_str() {
            OAUTH_TOKEN_KEY => {
                if token.replace(value).is_some() {
                    return Err(duplicated(OAUTH_TOKEN_KEY, text));
                }
            }
            OAUTH_TOKEN_SECRET_KEY => {
                if token_secret.replace(value).is_some() {
                    return Err(duplicated(OAUTH_TOKEN_SECRET_KEY, text));
                }
            }
            _ => {
                remain.insert(key, value);
            }
        }
    }

    match (token, token_secret) {
        (Some(token), Some(token_secret)) => Ok(UnauthorizedToken {
            token,
            token_secret,
            remain,
        }),
        (None, _) => Err(not_found(OAUTH_TOKEN_KEY, text)),
        (_, None) => Err(not_found(OAUTH_TOKEN_SECRET_KEY, text)),
    }
}

fn not_found(key: &'static str, text: &str) -> TokenReaderError {
    ResponseFormatError::TokenKeyNotFound(key, text.to_string()).into()
}

fn duplicated(key: &'static str, text: &str) -> TokenReaderError {
    ResponseFormatError::DuplicateKey(key, text.to_string()).into()
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn parse_response_typical() {
        let resp_str_sample = "oauth_token=Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik&oauth_token_secret=Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM&oauth_callback_confirmed=true";
        for parsed in &[
            read_request_token(resp_str_sample.as_bytes()).unwrap(),
            serde_urlencoded::from_str::<UnauthorizedToken>(resp_str_sample).unwrap(),
        ] {
            assert_eq!(parsed.token, "Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik");
            assert_eq!(
                parsed.token_secret,
                "Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM"
            );
            assert_eq!(parsed.remain.len(), 1);
            assert!(parsed.callback_confirmed());
        }
    }

    #[test]
    fn parse_response_escaped() {
        let resp_str_sample = "oauth_token=ab%2Fc%3D&oauth_token_secret=x+y%2Bz";
        for parsed in &[
            read_request_token(resp_str_sample.as_bytes()).unwrap(),
            serde_urlencoded::from_str::<UnauthorizedToken>(resp_str_sample).unwrap(),
        ] {
            assert_eq!(parsed.token, "ab/c=");
            assert_eq!(parsed.token_secret, "x y+z");
            assert!(!parsed.callback_confirmed());
        }
    }

    #[test]
    fn parse_response_edge() {
        let resp_str_sample = "oauth_token==&oauth_token_secret=&keyonly=&keyonly2&=&&";
        for parsed in &[
            read_request_token(resp_str_sample.as_bytes()).unwrap(),
            serde_urlencoded::from_str::<UnauthorizedToken>(resp_str_sample).unwrap(),
        ] {
            assert_eq!(parsed.token, "=");
            assert_eq!(parsed.token_secret, "");
            assert_eq!(parsed.remain.len(), 3);
            assert_eq!(parsed.remain.get("keyonly").unwrap(), "");
            assert_eq!(parsed.remain.get("keyonly2").unwrap(), "");
            assert_eq!(parsed.remain.get("").unwrap(), "");
        }
    }

    #[test]
    fn parse_trailing_newline() {
        let parsed = read_request_token(b"oauth_token=abc123&oauth_token_secret=xyz789\n").unwrap();
        assert_eq!(parsed.token, "abc123");
        assert_eq!(parsed.token_secret, "xyz789");
    }

    #[test]
    fn parse_token_notfound() {
        let resp_str_sample = "oauth_token_secret=";
        let parsed = read_request_token(resp_str_sample.as_bytes());
        if let Err(TokenReaderError::Format(ResponseFormatError::TokenKeyNotFound(key, resp_str))) =
            parsed
        {
            assert_eq!(key, OAUTH_TOKEN_KEY);
            assert_eq!(resp_str, resp_str_sample)
        } else {
            panic!("unexpected result: {:?}", parsed)
        }
    }

    #[test]
    fn parse_token_secret_notfound() {
        let resp_str_sample = "oauth_token=abc123";
        let parsed = read_request_token(resp_str_sample.as_bytes());
        if let Err(TokenReaderError::Format(ResponseFormatError::TokenKeyNotFound(key, resp_str))) =
            parsed
        {
            assert_eq!(key, OAUTH_TOKEN_SECRET_KEY);
            assert_eq!(resp_str, resp_str_sample)
        } else {
            panic!("unexpected result: {:?}", parsed)
        }
    }

    #[test]
    fn parse_duplicated_token() {
        let parsed = read_request_token(b"oauth_token=a&oauth_token=b&oauth_token_secret=s");
        assert!(matches!(
            parsed,
            Err(TokenReaderError::Format(ResponseFormatError::DuplicateKey(
                OAUTH_TOKEN_KEY,
                _
            )))
        ));
    }

    #[test]
    fn parse_not_utf8() {
        let parsed = read_request_token(&[0x6f, 0xff, 0xfe]);
        assert_eq!(
            parsed,
            Err(TokenReaderError::Encoding(EncodingError::Utf8 {
                context: "response body"
            }))
        );
    }
}

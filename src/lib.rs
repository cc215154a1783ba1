/*!
oauth1-request-token: the request token step of OAuth 1.0, signed with HMAC-SHA1.

# Overview

This library performs the first leg of the OAuth 1.0 flow: it assembles the
protocol parameters, builds the signature base string, signs it with
HMAC-SHA1 and sends it in the `Authorization` header of a `GET` to the
Service Provider's request token endpoint.
The HTTP call goes through the [`HttpTransport`] trait, implemented for
[reqwest](https://crates.io/crates/reqwest)'s `Client` out of the box.

# How to use

## Acquiring a request token

```rust,no_run
use oauth1_request_token::{Consumer, RequestTokenClient};

# async fn run() -> oauth1_request_token::Result<()> {
// prepare consumer info
let consumer = Consumer::new(
    "[CONSUMER_KEY]",
    "[CONSUMER_SECRET]",
    "https://api.twitter.com/oauth/request_token",
)
.callback("oob");

let client = RequestTokenClient::new();
let token = client.request_token(&consumer).await?;

println!("please access to: https://api.twitter.com/oauth/authorize?oauth_token={}", token.token);
# Ok(())
# }
```

## Signing without sending

```rust
use oauth1_request_token::{Consumer, FixedClock, FixedNonce, RequestTokenClient};

let consumer = Consumer::new("key", "secret", "http://example.com/request_token")
    .callback("https://client.example.com/cb");

// pin timestamp and nonce to reproduce a signature
let client = RequestTokenClient::with_transport(())
    .clock(FixedClock(1_300_000_000))
    .nonce_source(FixedNonce::new("42"));

let request = client.authorize(&consumer).unwrap();
assert_eq!(
    request.parameters.get("oauth_signature").unwrap(),
    "9gxiL88hbUlGtC1DXjLGc%2Bp8Xkc%3D"
);
```

With the `blocking` feature, `RequestTokenClient<reqwest::blocking::Client>`
offers `request_token_blocking`.
*/
mod client;
mod consumer;
mod encode;
mod error;
mod params;
mod signer;
mod source;
mod token_reader;
mod transport;
#[cfg(feature = "blocking")]
mod transport_blocking;

// exposed to external program
pub use client::{AuthorizedRequest, RequestTokenClient};
pub use consumer::{Consumer, OUT_OF_BAND_CALLBACK};
pub use encode::{form_decode, percent_encode};
pub use error::{
    ConfigError, EncodingError, Error, ParameterError, ParameterResult, ResponseFormatError,
    Result, TokenReaderError, TokenReaderResult, TransportError, TransportResult,
};
pub use params::OrderedParams;
pub use signer::{authorization_header, base_string, sign, signing_key};
pub use source::{Clock, FixedClock, FixedNonce, NonceSource, RandomNonce, SystemClock};
pub use token_reader::{read_request_token, UnauthorizedToken};
pub use transport::{HttpResponse, HttpTransport};
#[cfg(feature = "blocking")]
pub use transport_blocking::BlockingHttpTransport;

// exposed constant variables
/// Represents `oauth_callback`.
pub const OAUTH_CALLBACK_KEY: &str = "oauth_callback";
/// Represents `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// Represents `oauth_nonce`.
pub const OAUTH_NONCE_KEY: &str = "oauth_nonce";
/// Represents `oauth_signature`.
pub const OAUTH_SIGNATURE_KEY: &str = "oauth_signature";
/// Represents `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD_KEY: &str = "oauth_signature_method";
/// Represents `oauth_timestamp`.
pub const OAUTH_TIMESTAMP_KEY: &str = "oauth_timestamp";
/// Represents `oauth_version`.
pub const OAUTH_VERSION_KEY: &str = "oauth_version";
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_token_secret`.
pub const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";

// crate-private constant variables
pub(crate) const OAUTH_CALLBACK_CONFIRMED_KEY: &str = "oauth_callback_confirmed";

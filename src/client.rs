use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use http::Method;
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::signer::{authorization_header, base_string, sign, signing_key};
use crate::token_reader::read_request_token;
use crate::{
    Clock, Consumer, EncodingError, Error, HttpResponse, HttpTransport, NonceSource,
    OrderedParams, RandomNonce, Result, SystemClock, UnauthorizedToken, OAUTH_CALLBACK_KEY,
    OAUTH_CONSUMER_KEY, OAUTH_NONCE_KEY, OAUTH_SIGNATURE_KEY, OAUTH_SIGNATURE_METHOD_KEY,
    OAUTH_TIMESTAMP_KEY, OAUTH_VERSION_KEY,
};

const OAUTH_VERSION: &str = "1.0";
const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Acquires unauthorized request tokens from a Service Provider.
///
/// Every call works on its own parameter set, so one client can serve
/// concurrent callers as long as the transport allows it.
#[derive(Debug, Clone)]
pub struct RequestTokenClient<T, C = SystemClock, N = RandomNonce> {
    transport: T,
    clock: C,
    nonce: N,
}

/// A signed request token request, ready to be sent.
#[derive(Debug, Clone)]
pub struct AuthorizedRequest {
    /// Request token url, query included.
    pub url: Url,
    /// The signature base string the signature was computed over.
    pub base_string: String,
    /// Value of the `Authorization` header.
    pub authorization: String,
    /// The `oauth_*` and additional parameters, `oauth_signature` included.
    pub parameters: OrderedParams,
}

impl AuthorizedRequest {
    /// Returns the headers to send, which is the `Authorization` header only.
    pub fn headers(&self) -> Result<HeaderMap> {
        let value = HeaderValue::from_str(&self.authorization)
            .map_err(|_| EncodingError::Header {
                name: "authorization",
            })?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

impl From<ReqwestClient> for RequestTokenClient<ReqwestClient> {
    fn from(client: ReqwestClient) -> Self {
        RequestTokenClient::with_transport(client)
    }
}

impl RequestTokenClient<ReqwestClient> {
    /// Constructs a new `RequestTokenClient`.
    ///
    /// This method calls reqwest::Client::new() internally.
    pub fn new() -> Self {
        RequestTokenClient::with_transport(ReqwestClient::new())
    }
}

impl Default for RequestTokenClient<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestTokenClient<T> {
    /// Constructs a new `RequestTokenClient` with specifying the transport.
    pub fn with_transport(transport: T) -> Self {
        RequestTokenClient {
            transport,
            clock: SystemClock,
            nonce: RandomNonce,
        }
    }
}

impl<T, C, N> RequestTokenClient<T, C, N> {
    /// Replaces the source of `oauth_timestamp`.
    pub fn clock<TClock>(self, clock: TClock) -> RequestTokenClient<T, TClock, N>
    where
        TClock: Clock,
    {
        RequestTokenClient {
            transport: self.transport,
            clock,
            nonce: self.nonce,
        }
    }

    /// Replaces the source of `oauth_nonce`.
    pub fn nonce_source<TNonce>(self, nonce: TNonce) -> RequestTokenClient<T, C, TNonce>
    where
        TNonce: NonceSource,
    {
        RequestTokenClient {
            transport: self.transport,
            clock: self.clock,
            nonce,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T, C, N> RequestTokenClient<T, C, N>
where
    C: Clock,
    N: NonceSource,
{
    /// Builds the protocol parameters of a request token request, unsigned.
    pub fn oauth_parameters(&self, consumer: &Consumer<'_>) -> Result<OrderedParams> {
        let mut params = OrderedParams::new();
        params.add(OAUTH_VERSION_KEY, OAUTH_VERSION)?;
        params.add(OAUTH_SIGNATURE_METHOD_KEY, SIGNATURE_METHOD)?;
        params.add(OAUTH_TIMESTAMP_KEY, self.clock.timestamp().to_string())?;
        params.add(OAUTH_NONCE_KEY, self.nonce.nonce())?;
        params.add(OAUTH_CONSUMER_KEY, consumer.consumer_key())?;
        params.add(OAUTH_CALLBACK_KEY, consumer.callback_url())?;
        for (key, value) in consumer.additional_params() {
            params.add(key.as_str(), value)?;
        }
        Ok(params)
    }

    /// Signs a request token request for `consumer` without sending it.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if `consumer` is incomplete, [`Error::Parameter`] if an
    /// additional parameter or a query parameter of the request token url
    /// collides with a protocol parameter.
    pub fn authorize(&self, consumer: &Consumer<'_>) -> Result<AuthorizedRequest> {
        let url = consumer.validate()?;
        let mut params = self.oauth_parameters(consumer)?;

        // query parameters are signed but stay in the url
        let mut signed = params.clone();
        for (key, value) in url.query_pairs() {
            signed.add(key, value)?;
        }
        let mut base_url = url.clone();
        base_url.set_query(None);
        base_url.set_fragment(None);

        let base = base_string(Method::GET.as_str(), base_url.as_str(), &signed);
        let signature = sign(&base, &signing_key(consumer.consumer_secret(), None));
        params.add(OAUTH_SIGNATURE_KEY, signature)?;

        let authorization = authorization_header(&params);
        tracing::trace!(
            base_string = %base,
            authorization = %authorization,
            "signed request token request"
        );
        Ok(AuthorizedRequest {
            url,
            base_string: base,
            authorization,
            parameters: params,
        })
    }
}

impl<T, C, N> RequestTokenClient<T, C, N>
where
    T: HttpTransport,
    C: Clock,
    N: NonceSource,
{
    /// Runs the request token exchange for `consumer`.
    ///
    /// Nothing is sent when the consumer is incomplete or signing fails.
    /// Transport errors are returned as is, without retrying.
    pub async fn request_token(&self, consumer: &Consumer<'_>) -> Result<UnauthorizedToken> {
        let request = self.authorize(consumer)?;
        let headers = request.headers()?;
        tracing::debug!(
            url = %request.url,
            consumer_key = consumer.consumer_key(),
            "requesting unauthorized token"
        );
        let response = self.transport.execute_get(&request.url, headers).await?;
        read_response(response)
    }
}

pub(crate) fn read_response(response: HttpResponse) -> Result<UnauthorizedToken> {
    let HttpResponse { status, body } = response;
    tracing::debug!(status = status.as_u16(), "request token response received");
    if !status.is_success() {
        let body = String::from_utf8_lossy(&body).into_owned();
        tracing::warn!(status = status.as_u16(), body = %body, "request token request rejected");
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(read_request_token(&body)?)
}

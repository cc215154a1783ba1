use http::{HeaderMap, Method};
use reqwest::blocking::Client as BlockingClient;
use url::Url;

use crate::{
    Clock, Consumer, HttpResponse, NonceSource, RequestTokenClient, Result, TransportResult,
    UnauthorizedToken,
};

/// Blocking counterpart of [`HttpTransport`](crate::HttpTransport).
pub trait BlockingHttpTransport {
    fn execute_get(&self, url: &Url, headers: HeaderMap) -> TransportResult<HttpResponse>;
}

impl BlockingHttpTransport for BlockingClient {
    fn execute_get(&self, url: &Url, headers: HeaderMap) -> TransportResult<HttpResponse> {
        let resp = self
            .request(Method::GET, url.clone())
            .headers(headers)
            .send()?;
        let status = resp.status();
        let body = resp.bytes()?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

impl<T, C, N> RequestTokenClient<T, C, N>
where
    T: BlockingHttpTransport,
    C: Clock,
    N: NonceSource,
{
    /// Blocking variant of [`RequestTokenClient::request_token`].
    pub fn request_token_blocking(&self, consumer: &Consumer<'_>) -> Result<UnauthorizedToken> {
        let request = self.authorize(consumer)?;
        let headers = request.headers()?;
        tracing::debug!(
            url = %request.url,
            consumer_key = consumer.consumer_key(),
            "requesting unauthorized token"
        );
        let response = self.transport().execute_get(&request.url, headers)?;
        crate::client::read_response(response)
    }
}

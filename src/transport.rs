use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::TransportResult;

/// Status and fully read body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new<B: Into<Vec<u8>>>(status: StatusCode, body: B) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }
}

/// Issues the request token `GET` on behalf of [`RequestTokenClient`](crate::RequestTokenClient).
///
/// Implementations read the body to the end and release the connection
/// before returning. Timeouts and retries belong to the implementation.
#[async_trait]
pub trait HttpTransport {
    async fn execute_get(&self, url: &Url, headers: HeaderMap) -> TransportResult<HttpResponse>;
}

#[async_trait]
impl HttpTransport for ReqwestClient {
    async fn execute_get(&self, url: &Url, headers: HeaderMap) -> TransportResult<HttpResponse> {
        let resp = self
            .request(Method::GET, url.clone())
            .headers(headers)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl<T> HttpTransport for &T
where
    T: HttpTransport + Sync + ?Sized,
{
    async fn execute_get(&self, url: &Url, headers: HeaderMap) -> TransportResult<HttpResponse> {
        (**self).execute_get(url, headers).await
    }
}

//! HTTP capability used to reach the connections proxy.

use crate::error::BoxError;
use std::fmt;
use std::io::Read;

/// A response from [`HttpClient::post`].
///
/// The body is owned by the response and released when it is dropped.
pub struct HttpResponse {
    status: u16,
    body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    /// HTTP status the proxy answered with.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Take ownership of the body reader.
    pub fn into_body(self) -> Box<dyn Read + Send> {
        self.body
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Anything that can POST a body to a URL.
pub trait HttpClient {
    fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse, BoxError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse, BoxError> {
        (**self).post(url, content_type, body)
    }
}

/// [`HttpClient`] backed by a blocking `reqwest` client with its default settings.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<HttpResponse, BoxError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()?;

        Ok(HttpResponse::new(response.status().as_u16(), response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_response_body() {
        let response = HttpResponse::new(201, Cursor::new(b"{}".to_vec()));
        assert_eq!(response.status(), 201);
        assert_eq!(format!("{:?}", response), "HttpResponse { status: 201, .. }");

        let mut body = String::new();
        response.into_body().read_to_string(&mut body).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_unreachable_proxy_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = ReqwestClient::new();
        let result = client.post("http://127.0.0.1:9/send", "application/json", b"{}".to_vec());
        assert!(result.is_err());
    }
}

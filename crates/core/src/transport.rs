//! Blocking HTTP transport for the CSS endpoint and the asset URLs it names.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::error::{Error, Result};

/// A fetched text resource and the URL it finally resolved to.
#[derive(Debug, Clone)]
pub struct FetchedText {
    /// Final URL after query-string assembly and redirects.
    pub url: String,
    pub body: String,
}

/// A fetched binary resource and the URL it finally resolved to.
#[derive(Debug, Clone)]
pub struct FetchedBytes {
    /// Final URL after redirects.
    pub url: String,
    pub bytes: Vec<u8>,
}

/// Minimal blocking GET surface used by [`crate::bundle::FontBundleBuilder`].
///
/// Implementations send the given client identifier as the `User-Agent`
/// header and fail with [`Error::Status`] on any non-success status, so
/// callers only ever see successful payloads.
pub trait Transport {
    /// GET a text resource with query parameters.
    fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        user_agent: &str,
    ) -> Result<FetchedText>;

    /// GET a binary resource.
    fn get_bytes(&self, url: &str, user_agent: &str) -> Result<FetchedBytes>;
}

/// [`Transport`] backed by a shared [`reqwest`] blocking client.
///
/// Redirect handling and timeouts are whatever the client defaults to.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Transport for HttpTransport {
    fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        user_agent: &str,
    ) -> Result<FetchedText> {
        let response = self.client.get(url).query(query).header(USER_AGENT, user_agent).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status, url: response.url().to_string() });
        }
        let url = response.url().to_string();
        Ok(FetchedText { url, body: response.text()? })
    }

    fn get_bytes(&self, url: &str, user_agent: &str) -> Result<FetchedBytes> {
        let response = self.client.get(url).header(USER_AGENT, user_agent).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status, url: response.url().to_string() });
        }
        let url = response.url().to_string();
        Ok(FetchedBytes { url, bytes: response.bytes()?.to_vec() })
    }
}

use super::common::{HTTPError, RequestError};
use super::http_request::request_common::{HTTPRequestMethod, HTTPRequestType};
use super::http_response::response_common::HTTPResponseType;
use crate::config::Config;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for all REST calls to the flight backend.
/// It applies the configured timeout to every request and allows easy reuse
/// of the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` from the given configuration.
    ///
    /// # Arguments
    /// * `config` – Supplies the root URL (e.g. `"http://localhost:5000"`) and the request timeout.
    ///
    /// # Errors
    /// Returns a transport error if the TLS backend or resolver cannot be initialized.
    pub fn new(config: &Config) -> Result<HTTPClient, HTTPError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(RequestError::from)?;
        Ok(HTTPClient { client, base_url: config.base_url().to_string() })
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Sends a typed request and parses the response into its typed result.
    ///
    /// The whole body is read before parsing, so a rejection can still surface
    /// the `error` text the backend attached to it.
    pub(crate) async fn send<T>(
        &self,
        request: &T,
    ) -> Result<<T::Response as HTTPResponseType>::ParsedResponseType, HTTPError>
    where
        T: HTTPRequestType,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let mut builder = match request.request_method() {
            HTTPRequestMethod::Get => self.client.get(url),
            HTTPRequestMethod::Post => self.client.post(url),
            HTTPRequestMethod::Delete => self.client.delete(url),
        };
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(<T::Response as HTTPResponseType>::read_response(status, &body)?)
    }
}

//! Client object to interact with the platform API.

use crate::{config::Config, error::Result, StackCtlClientError};
use http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method, Request,
};
use hyper::{client::HttpConnector, Body};
use hyper_rustls::HttpsConnector;
use serde::{de::DeserializeOwned, Serialize};
use stackctl::{
    constants::headers::REQUEST_ID, infrastructure::logging::record_field, types::Envelope,
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Connection type used by [`StackCtlClient`].
type HttpsClient = hyper::Client<HttpsConnector<HttpConnector>, Body>;

/// A `StackCtlClient` wraps the configuration and connection pool needed to
/// make authenticated requests to the platform API. It is cheap to clone;
/// clones share the same pool.
#[derive(Clone, Debug)]
pub struct StackCtlClient {
    config: Config,
    http: HttpsClient,
}

impl StackCtlClient {
    /// Create a client for the API described by `config`. No request is sent
    /// until the first operation is called.
    pub fn connect(config: &Config) -> Self {
        let builder = hyper_rustls::HttpsConnectorBuilder::new();
        let builder = match &config.tls_config {
            Some(tls_config) => builder.with_tls_config(tls_config.clone()),
            None => builder.with_webpki_roots(),
        };
        let connector = builder
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        Self {
            config: config.clone(),
            http: hyper::Client::builder().build(connector),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET` a single object wrapped in the API envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let envelope: Envelope<T> = self.send(Method::GET, path, None).await?;
        Ok(envelope.response)
    }

    /// `GET` every page of a list endpoint.
    pub(crate) async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let envelope: Envelope<Vec<T>> = self
                .send(Method::GET, &format!("{path}?page={page}"), None)
                .await?;
            let next = envelope.next_page();
            items.extend(envelope.response);

            match next {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }
        Ok(items)
    }

    /// `POST` a JSON body and return the enveloped answer.
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_vec(body)?;
        let envelope: Envelope<T> = self.send(Method::POST, path, Some(body)).await?;
        Ok(envelope.response)
    }

    #[instrument(skip(self, body), fields(request_id))]
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let request_id = Uuid::new_v4();
        record_field("request_id", &request_id);

        let uri = format!("{}/{}", self.config.api_base(), path.trim_start_matches('/'));
        debug!("Sending request to {}", uri);

        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(ACCEPT, "application/json")
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.config.access_token.expose()),
            )
            .header(REQUEST_ID, request_id.to_string());
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.http.request(request).await?;
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await?;
        debug!("Received {} ({} bytes)", status, bytes.len());

        if !status.is_success() {
            return Err(StackCtlClientError::from_response(status, &bytes));
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

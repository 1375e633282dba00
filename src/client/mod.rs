//! Client layer: orchestrates transport calls and maps wire data to entities and cursors.

mod cursor;
mod entity;
mod error;
#[cfg(test)]
pub(crate) mod testing;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

pub use cursor::ApiCursor;
pub use entity::Entity;
pub use error::TelerivetError;

use crate::domain::{ApiKey, Params, ValidationError};
use crate::resources::{Organization, Project, Resource, segment};
use crate::transport::{DecodedResponse, JsonBody};

const DEFAULT_API_URL: &str = "https://api.telerivet.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_ENV: &str = "TELERIVET_API_KEY";
const API_URL_ENV: &str = "TELERIVET_API_URL";

/// HTTP verbs accepted by the Telerivet REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    authorization: String,
    body: Option<JsonBody>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest)
    -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        use reqwest::header::{AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE};

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, request.url)
            .header(AUTHORIZATION, request.authorization);
        if request.method.has_body() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = request.body {
            if body.gzipped {
                builder = builder.header(CONTENT_ENCODING, "gzip");
            }
            builder = builder.body(body.bytes);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TelerivetClient`].
///
/// Use this when you need to customize the API URL, timeouts, or user-agent.
pub struct TelerivetClientBuilder {
    api_key: ApiKey,
    api_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
}

impl TelerivetClientBuilder {
    /// Create a builder with the production API URL and 10 second timeouts.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: format!("Telerivet Rust Client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the API base URL (for example a staging deployment).
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Timeout applied to each whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`TelerivetClient`].
    pub fn build(self) -> Result<TelerivetClient, TelerivetError> {
        let api_url = normalize_api_url(&self.api_url)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|err| TelerivetError::Transport(Box::new(err)))?;

        Ok(TelerivetClient::with_transport(
            self.api_key,
            api_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

fn normalize_api_url(api_url: &str) -> Result<String, TelerivetError> {
    let trimmed = api_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "api_url" }.into());
    }
    Url::parse(trimmed).map_err(|err| TelerivetError::Parse(Box::new(err)))?;
    Ok(trimmed.to_owned())
}

struct ClientInner {
    api_url: String,
    authorization: String,
    http: Arc<dyn HttpTransport>,
    num_requests: AtomicU64,
}

#[derive(Clone)]
/// Handle to the Telerivet REST API.
///
/// Every request is authenticated with HTTP Basic auth using the API key as username. Clones
/// share one connection pool and request counter, so the handle can be passed freely between
/// threads; the entities and cursors it returns are plain owned values.
///
/// Calls block until the response arrives and are attempted exactly once.
pub struct TelerivetClient {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for TelerivetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelerivetClient")
            .field("api_url", &self.inner.api_url)
            .field("num_requests", &self.num_requests())
            .finish_non_exhaustive()
    }
}

impl TelerivetClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`TelerivetClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, TelerivetError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TelerivetClientBuilder {
        TelerivetClientBuilder::new(api_key)
    }

    /// Create a client from `TELERIVET_API_KEY` and, if set, `TELERIVET_API_URL`.
    pub fn from_env() -> Result<Self, TelerivetError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ValidationError::Empty { field: API_KEY_ENV })?;
        let mut builder = Self::builder(ApiKey::new(api_key)?);
        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            builder = builder.api_url(api_url);
        }
        builder.build()
    }

    fn with_transport(api_key: ApiKey, api_url: String, http: Arc<dyn HttpTransport>) -> Self {
        let credentials = format!("{}:", api_key.as_str());
        Self {
            inner: Arc::new(ClientInner {
                api_url,
                authorization: format!("Basic {}", BASE64.encode(credentials)),
                http,
                num_requests: AtomicU64::new(0),
            }),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.inner.api_url
    }

    /// Number of requests attempted through this handle and its clones.
    pub fn num_requests(&self) -> u64 {
        self.inner.num_requests.load(Ordering::Relaxed)
    }

    /// Issue one request against `path` (relative to the API URL) and return the decoded
    /// JSON body.
    ///
    /// GET and DELETE parameters go into the query string; POST and PUT parameters are
    /// sent as a JSON body, gzip-compressed when large.
    ///
    /// Errors:
    /// - [`TelerivetError::Encode`] when the body cannot be serialized or compressed,
    /// - [`TelerivetError::Transport`] when the server cannot be reached,
    /// - [`TelerivetError::InvalidParameter`] / [`TelerivetError::NotFound`] /
    ///   [`TelerivetError::Api`] for non-200 responses,
    /// - [`TelerivetError::Parse`] when a 200 body is not JSON.
    pub fn do_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&Params>,
    ) -> Result<Value, TelerivetError> {
        let mut url = Url::parse(&format!("{}{}", self.inner.api_url, path))
            .map_err(|err| TelerivetError::Parse(Box::new(err)))?;

        let mut body = None;
        if method.has_body() {
            if let Some(params) = params {
                body = Some(
                    crate::transport::encode_json_body(params)
                        .map_err(|err| TelerivetError::Encode(Box::new(err)))?,
                );
            }
        } else if let Some(params) = params {
            let pairs = crate::transport::encode_query_params(params);
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        debug!(
            %method,
            path,
            body_bytes = body.as_ref().map_or(0, |b| b.bytes.len()),
            gzipped = body.as_ref().is_some_and(|b| b.gzipped),
            "sending Telerivet API request"
        );

        self.inner.num_requests.fetch_add(1, Ordering::Relaxed);
        let response = self
            .inner
            .http
            .execute(HttpRequest {
                method,
                url,
                authorization: self.inner.authorization.clone(),
                body,
            })
            .map_err(TelerivetError::Transport)?;

        debug!(status = response.status, %method, path, "received Telerivet API response");

        match crate::transport::decode_response(response.status, &response.body)
            .map_err(|err| TelerivetError::Parse(Box::new(err)))?
        {
            DecodedResponse::Ok(value) => Ok(value),
            DecodedResponse::Failed(failure) => {
                warn!(
                    status = failure.status,
                    code = failure.code.as_deref().unwrap_or(""),
                    %method,
                    path,
                    "Telerivet API request failed"
                );
                Err(TelerivetError::from_api_failure(failure))
            }
        }
    }

    /// Like [`TelerivetClient::do_request`], for endpoints that answer with a single object.
    pub(crate) fn request_object(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&Params>,
    ) -> Result<Params, TelerivetError> {
        match self.do_request(method, path, params)? {
            Value::Object(fields) => Ok(fields),
            other => Err(TelerivetError::Parse(
                format!("expected a JSON object from {path}, got {other}").into(),
            )),
        }
    }

    /// Fetch one resource and wrap it as a loaded entity.
    pub(crate) fn fetch<R: Resource>(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&Params>,
    ) -> Result<R, TelerivetError> {
        let fields = self.request_object(method, path, params)?;
        Ok(R::from_loaded(self.clone(), fields))
    }

    /// Reference a resource by its identifying fields without a request.
    pub(crate) fn reference<R: Resource>(&self, seed: &[(&str, &str)]) -> R {
        let seed = seed
            .iter()
            .map(|(name, value)| ((*name).to_owned(), Value::String((*value).to_owned())))
            .collect();
        R::from_entity(Entity::unloaded(self.clone(), R::KIND, seed))
    }

    pub(crate) fn cursor<R: Resource>(
        &self,
        path: String,
        params: Params,
    ) -> Result<ApiCursor<R>, TelerivetError> {
        ApiCursor::new(self.clone(), path, params, R::from_loaded)
    }

    /// Retrieve the project with the given id.
    pub fn get_project_by_id(&self, id: &str) -> Result<Project, TelerivetError> {
        self.fetch(HttpMethod::Get, &format!("/projects/{}", segment(id)), None)
    }

    /// Reference the project with the given id without making a request.
    pub fn init_project_by_id(&self, id: &str) -> Project {
        self.reference(&[("id", id)])
    }

    /// Query projects accessible to the API key's user.
    pub fn query_projects(&self, params: Params) -> Result<ApiCursor<Project>, TelerivetError> {
        self.cursor("/projects".to_owned(), params)
    }

    pub fn get_organization_by_id(&self, id: &str) -> Result<Organization, TelerivetError> {
        self.fetch(HttpMethod::Get, &format!("/organizations/{}", segment(id)), None)
    }

    pub fn init_organization_by_id(&self, id: &str) -> Organization {
        self.reference(&[("id", id)])
    }

    pub fn query_organizations(
        &self,
        params: Params,
    ) -> Result<ApiCursor<Organization>, TelerivetError> {
        self.cursor("/organizations".to_owned(), params)
    }
}

//! Scripted in-memory transport shared by the crate's unit tests.

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::io::Read;
use std::sync::{Arc, Mutex};

use flate2::read::GzDecoder;
use serde_json::Value;
use url::Url;

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TelerivetClient};
use crate::domain::{ApiKey, Params};

pub(crate) const TEST_API_URL: &str = "https://api.example.invalid/v1";

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub authorization: String,
    pub body: Option<Value>,
    pub gzipped: bool,
}

impl RecordedRequest {
    /// Path relative to the API URL.
    pub fn api_path(&self) -> String {
        self.url
            .path()
            .strip_prefix("/v1")
            .unwrap_or(self.url.path())
            .to_owned()
    }

    pub fn query(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[derive(Debug, Default)]
struct FakeTransportState {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<Result<(u16, String), String>>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn respond(&self, status: u16, body: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.responses.push_back(Ok((status, body.into())));
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond(status, body.to_string());
    }

    /// Queue a connection-level failure.
    pub fn fail(&self, message: &str) {
        let mut state = self.state.lock().unwrap();
        state.responses.push_back(Err(message.to_owned()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request has been recorded")
    }
}

impl HttpTransport for FakeTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let (body, gzipped) = match request.body {
            Some(body) if body.gzipped => {
                let mut json = String::new();
                GzDecoder::new(body.bytes.as_slice()).read_to_string(&mut json)?;
                (Some(serde_json::from_str(&json)?), true)
            }
            Some(body) => (Some(serde_json::from_slice(&body.bytes)?), false),
            None => (None, false),
        };

        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method: request.method,
            url: request.url,
            authorization: request.authorization,
            body,
            gzipped,
        });
        match state.responses.pop_front() {
            Some(Ok((status, body))) => Ok(HttpResponse { status, body }),
            Some(Err(message)) => Err(message.into()),
            None => Err("no scripted response left".into()),
        }
    }
}

pub(crate) fn fake_client(transport: &FakeTransport) -> TelerivetClient {
    TelerivetClient::with_transport(
        ApiKey::new("test_key").unwrap(),
        TEST_API_URL.to_owned(),
        Arc::new(transport.clone()),
    )
}

pub(crate) fn params(value: Value) -> Params {
    value
        .as_object()
        .cloned()
        .expect("params must be a JSON object")
}

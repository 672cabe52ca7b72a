// Registry API HTTP client
//
// Wraps `reqwest::Client` with registry URL construction and body
// interpretation. Endpoint methods (players, teams) are implemented as
// inherent methods in separate files to keep this module focused on
// transport mechanics.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::registry::models::ListResponse;
use crate::transport::TransportConfig;

/// Root of the public Mario Kart Central site. API and storage paths hang off it.
pub const DEFAULT_BASE_URL: &str = "https://www.mariokartcentral.com/mkc/";

/// Raw HTTP client for the registry API.
///
/// Every method performs exactly one GET. Nothing is cached: two calls
/// for the same id are two round trips and may observe different data.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: Url,
    https_only: bool,
}

impl RegistryClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// The `base_url` is the site root (e.g. `https://www.mariokartcentral.com/mkc/`).
    /// A non-HTTPS base URL is rejected unless `transport.allow_http` is set.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        if !transport.allow_http && base_url.scheme() != "https" {
            return Err(Error::InsecureScheme {
                url: base_url.to_string(),
            });
        }
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: with_trailing_slash(base_url),
            https_only: !transport.allow_http,
        })
    }

    /// Client for the public registry with default transport settings.
    pub fn public() -> Result<Self, Error> {
        Self::new(Url::parse(DEFAULT_BASE_URL)?, &TransportConfig::default())
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// No scheme policy is applied; the caller owns the transport setup.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
            https_only: false,
        }
    }

    /// The site root every request is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}api/registry/{path}`
    pub fn api_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("api/registry/{path}"))?)
    }

    /// `{base}api/registry/players/{id}`
    pub fn player_url(&self, id: u64) -> Result<Url, Error> {
        self.api_url(&format!("players/{id}"))
    }

    /// `{base}api/registry/teams/{id}`
    pub fn team_url(&self, id: u64) -> Result<Url, Error> {
        self.api_url(&format!("teams/{id}"))
    }

    /// `{base}api/registry/{collection}/category/{category}?{params}`
    ///
    /// Parameters are appended in the given order, empty values included.
    pub fn list_url(
        &self,
        collection: &str,
        category: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, Error> {
        let mut url = self.api_url(&format!("{collection}/category/{category}"))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    /// `{base}storage/{path}`, where uploaded media such as team logos live.
    pub fn storage_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self
            .base_url
            .join(&format!("storage/{}", path.trim_start_matches('/')))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and return the raw response body.
    ///
    /// Non-2xx statuses surface as `Error::Transport`.
    pub async fn fetch_text(&self, url: Url) -> Result<String, Error> {
        if self.https_only && url.scheme() != "https" {
            return Err(Error::InsecureScheme {
                url: url.to_string(),
            });
        }

        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        let resp = resp.error_for_status().map_err(Error::Transport)?;
        resp.text().await.map_err(Error::Transport)
    }

    /// Fetch a single record by id.
    ///
    /// A 404, an empty body, or an empty JSON value all mean the id is unknown.
    pub(crate) async fn get_record<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        id: u64,
        url: Url,
    ) -> Result<T, Error> {
        let body = match self.fetch_text(url).await {
            Err(Error::Transport(e)) if e.status() == Some(reqwest::StatusCode::NOT_FOUND) => {
                return Err(Error::NotFound { resource, id });
            }
            other => other?,
        };

        let value = parse_value(&body)?;
        if is_empty_payload(&value) {
            return Err(Error::NotFound { resource, id });
        }
        if let Some(message) = registry_error(&value) {
            return Err(Error::Registry { message });
        }
        decode(value, &body)
    }

    /// Fetch a `{count, data}` listing.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<ListResponse<T>, Error> {
        let body = self.fetch_text(url).await?;
        let value = parse_value(&body)?;
        if let Some(message) = registry_error(&value) {
            return Err(Error::Registry { message });
        }
        decode(value, &body)
    }
}

// ── Body interpretation ──────────────────────────────────────────────

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn parse_value(body: &str) -> Result<Value, Error> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: body.to_owned(),
    })
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Extract the registry's error indicator, if the body is one.
///
/// Data payloads always carry `id` or `data`, so a bare `message` only
/// counts as an error when neither is present.
fn registry_error(value: &Value) -> Option<String> {
    let map = value.as_object()?;
    let text = |v: &Value| v.as_str().map_or_else(|| v.to_string(), str::to_owned);

    if let Some(err) = map.get("error").filter(|v| !v.is_null() && *v != &Value::Bool(false)) {
        return Some(map.get("message").map_or_else(|| text(err), text));
    }
    if !map.contains_key("id") && !map.contains_key("data") {
        return map.get("message").map(text);
    }
    None
}

fn decode<T: DeserializeOwned>(value: Value, body: &str) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: body.to_owned(),
    })
}

//! Asynchronous Grafana dashboard client implementation.

use crate::models::{BoardProperties, FoundBoard, SearchParams, SetDashboardParams, StatusMessage};
use crate::Result;
use grafana_board::{Board, RawBoard};
use grafana_core::client::ClientConfig;
use grafana_core::config::GrafanaClientConfig;
use grafana_core::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("grafana-client/", env!("CARGO_PKG_VERSION"));
const ORG_ID_HEADER: &str = "x-grafana-org-id";
const JSON_CONTENT: &str = "application/json";

/// Builder for [`GrafanaClient`].
#[derive(Debug)]
pub struct GrafanaClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    api_key: Option<SecretString>,
    basic_auth: Option<(String, SecretString)>,
    org_id: Option<u64>,
    tls_verify: bool,
}

impl GrafanaClientBuilder {
    /// Create a new builder with the provided Grafana base URL.
    ///
    /// The URL may carry a sub-path when Grafana is served behind a prefix
    /// (e.g. `https://example.com/grafana`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::ConfigError(format!(
                "Invalid Grafana base URL `{}`: {err}",
                base_url.as_ref()
            ))
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            http_config: ClientConfig::new(),
            api_key: None,
            basic_auth: None,
            org_id: None,
            tls_verify: true,
        })
    }

    /// Create a builder from a validated connection configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the configuration is invalid and
    /// [`Error::ConfigError`] if the URL cannot be parsed.
    pub fn from_config(config: &GrafanaClientConfig) -> Result<Self> {
        use validator::Validate;

        config.validate()?;
        let mut builder = Self::new(&config.url)?
            .with_http_config(ClientConfig::new().with_timeout(config.timeout()))
            .with_tls_verify(config.tls_verify);

        if let Some(key) = &config.api_key {
            builder = builder.with_api_key(key.expose_secret());
        }
        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.with_basic_auth(user.clone(), pass.expose_secret());
        }
        if let Some(org_id) = config.org_id {
            builder = builder.with_org_id(org_id);
        }
        Ok(builder)
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Configure API key or service account token authentication (sent as a
    /// Bearer token). Takes precedence over basic auth.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Configure HTTP basic authentication.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), SecretString::from(password.into())));
        self
    }

    /// Act in the given organization (sent as `X-Grafana-Org-Id`).
    #[must_use]
    pub const fn with_org_id(mut self, org_id: u64) -> Self {
        self.org_id = Some(org_id);
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Build the Grafana client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the credentials cannot be encoded
    /// as a header or the HTTP client cannot be built.
    pub fn build(self) -> Result<GrafanaClient> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT));
        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose_secret()))
                .map_err(|err| Error::ConfigError(format!("Invalid Grafana API key: {err}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(org_id) = self.org_id {
            headers.insert(HeaderName::from_static(ORG_ID_HEADER), HeaderValue::from(org_id));
        }

        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .connect_timeout(self.http_config.connect_timeout);

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }
        if !self.tls_verify {
            warn!(url = %self.base_url, "TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build Grafana HTTP client: {err}"))
        })?;

        // An API key already sits in the default headers.
        let basic_auth = if self.api_key.is_some() {
            None
        } else {
            self.basic_auth
        };

        Ok(GrafanaClient {
            http,
            base_url: self.base_url,
            basic_auth,
            enable_logging: self.http_config.enable_logging,
        })
    }
}

/// Asynchronous Grafana dashboard client.
///
/// Requests are sent once; failures are returned to the caller as is.
#[derive(Debug)]
pub struct GrafanaClient {
    http: Client,
    base_url: Url,
    basic_auth: Option<(String, SecretString)>,
    enable_logging: bool,
}

#[derive(Deserialize)]
struct DashboardEnvelope<T> {
    #[serde(default)]
    meta: BoardProperties,
    dashboard: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveDashboardRequest<'a, D: Serialize> {
    dashboard: &'a D,
    folder_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    folder_uid: Option<&'a str>,
    overwrite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<'a, D: Serialize> SaveDashboardRequest<'a, D> {
    fn new(dashboard: &'a D, params: &'a SetDashboardParams) -> Self {
        Self {
            dashboard,
            folder_id: params.folder_id,
            folder_uid: params.folder_uid.as_deref(),
            overwrite: params.overwrite,
            message: params.message.as_deref(),
        }
    }
}

#[derive(Deserialize)]
struct ApiMessage {
    message: Option<String>,
}

impl GrafanaClient {
    /// Create a new client for the given base URL without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        GrafanaClientBuilder::new(base_url)?.build()
    }

    /// Create a client from a connection configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GrafanaClientBuilder::from_config`] and
    /// [`GrafanaClientBuilder::build`].
    pub fn from_config(config: &GrafanaClientConfig) -> Result<Self> {
        GrafanaClientBuilder::from_config(config)?.build()
    }

    /// Access the underlying base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a dashboard and its metadata by uid.
    ///
    /// # Errors
    ///
    /// Returns the transport error for a failed request and the model error
    /// ([`Error::FieldTypeMismatch`], [`Error::MalformedDocument`]) when the
    /// dashboard does not decode.
    pub async fn get_dashboard_by_uid(&self, uid: &str) -> Result<(Board, BoardProperties)> {
        let url = self.dashboard_url(uid)?;
        let envelope: DashboardEnvelope<Value> = self.get_json(url, &[]).await?;
        let board = Board::from_value(&envelope.dashboard)?;
        Ok((board, envelope.meta))
    }

    /// Fetch a dashboard by uid without decoding it.
    ///
    /// # Errors
    ///
    /// Returns the transport error for a failed request and
    /// [`Error::MalformedDocument`] for a body that is not JSON.
    pub async fn get_raw_dashboard_by_uid(&self, uid: &str) -> Result<(RawBoard, BoardProperties)> {
        let url = self.dashboard_url(uid)?;
        let envelope: DashboardEnvelope<RawBoard> = self.get_json(url, &[]).await?;
        Ok((envelope.dashboard, envelope.meta))
    }

    /// Create or update a dashboard.
    ///
    /// Without `overwrite` the board's numeric id is not sent, so Grafana
    /// creates a new dashboard instead of replacing the one with that id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodeFailure`] if the board cannot be serialized,
    /// [`Error::PreconditionFailed`] on a version or name clash and the
    /// transport error for any other failed request.
    pub async fn set_dashboard(
        &self,
        board: &Board,
        params: &SetDashboardParams,
    ) -> Result<StatusMessage> {
        let url = self.build_url("api/dashboards/db")?;
        if params.overwrite || board.id.is_none() {
            return self
                .send_json(Method::POST, url, Some(&SaveDashboardRequest::new(board, params)), &[])
                .await;
        }

        let unsaved = Board {
            id: None,
            ..board.clone()
        };
        self.send_json(Method::POST, url, Some(&SaveDashboardRequest::new(&unsaved, params)), &[])
            .await
    }

    /// Create or update a dashboard from an undecoded document.
    ///
    /// The document is forwarded verbatim, including its `id`.
    ///
    /// # Errors
    ///
    /// Same as [`GrafanaClient::set_dashboard`].
    pub async fn set_raw_dashboard(
        &self,
        board: &RawBoard,
        params: &SetDashboardParams,
    ) -> Result<StatusMessage> {
        let url = self.build_url("api/dashboards/db")?;
        self.send_json(Method::POST, url, Some(&SaveDashboardRequest::new(board, params)), &[])
            .await
    }

    /// Delete a dashboard by uid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no dashboard has this uid and the
    /// transport error for any other failed request.
    pub async fn delete_dashboard_by_uid(&self, uid: &str) -> Result<StatusMessage> {
        let url = self.dashboard_url(uid)?;
        self.send_json(Method::DELETE, url, Option::<&()>::None, &[])
            .await
    }

    /// Search dashboards and folders.
    ///
    /// # Errors
    ///
    /// Returns the transport error for a failed request.
    pub async fn search_dashboards(&self, params: &SearchParams) -> Result<Vec<FoundBoard>> {
        let url = self.build_url("api/search")?;
        self.get_json(url, &params.to_pairs()).await
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let normalized = path.strip_prefix('/').unwrap_or(path);

        self.base_url
            .join(normalized)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid Grafana path `{path}`: {err}")))
    }

    fn dashboard_url(&self, uid: &str) -> Result<Url> {
        if uid.is_empty() {
            return Err(Error::InvalidRequest("dashboard uid must not be empty".to_string()));
        }
        let mut url = self.build_url("api/dashboards/uid/")?;
        let shown = url.to_string();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidEndpoint(format!("Cannot append uid to `{shown}`")))?
            .pop_if_empty()
            .push(uid);
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url, params: &[(&'static str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(Method::GET, url, Option::<&()>::None, params)
            .await
    }

    async fn send_json<B, R>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        params: &[(&'static str, String)],
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = url.path().to_string();
        let mut request = self.http.request(method.clone(), url).query(params);

        if let Some((user, pass)) = &self.basic_auth {
            request = request.basic_auth(user, Some(pass.expose_secret()));
        }
        if let Some(payload) = body {
            let bytes = serde_json::to_vec(payload).map_err(|err| {
                Error::EncodeFailure(format!("Failed to encode request for `{path}`: {err}"))
            })?;
            request = request.header(CONTENT_TYPE, JSON_CONTENT).body(bytes);
        }

        if self.enable_logging {
            info!(%method, path = %path, "Grafana request");
        }

        let response = request
            .send()
            .await
            .map_err(|err| self.failed(&method, &path, err.into()))?;
        let status = response.status();
        if self.enable_logging {
            debug!(%method, path = %path, status = status.as_u16(), "Grafana response");
        }

        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| self.failed(&method, &path, err.into()))?;
            return decode_body(&bytes).map_err(|err| self.failed(&method, &path, err));
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(self.failed(&method, &path, status_error(status, &path, text)))
    }

    fn failed(&self, method: &Method, path: &str, err: Error) -> Error {
        if self.enable_logging {
            let code = err.error_code();
            if err.should_log() {
                warn!(%method, path = %path, code, error = %err, "Grafana request failed");
            } else {
                debug!(%method, path = %path, code, error = %err, "Grafana request rejected");
            }
        }
        err
    }
}

/// Decodes a response body without a nesting limit; dashboards nest rows
/// arbitrarily deep.
fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Result<R> {
    let mut json = serde_json::Deserializer::from_slice(bytes);
    json.disable_recursion_limit();
    let decoded = R::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(decoded)
}

/// Maps a non-success status to an error, preferring Grafana's `message`.
fn status_error(status: StatusCode, path: &str, text: String) -> Error {
    let message = serde_json::from_str::<ApiMessage>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or(text);

    match status {
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Unauthorized(format!("Grafana rejected credentials for `{path}`: {message}"))
        }
        StatusCode::CONFLICT => Error::Conflict(message),
        StatusCode::PRECONDITION_FAILED => Error::PreconditionFailed(message),
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("Grafana server error {status}: {message}"))
        }
        _ => Error::HttpError(format!("Grafana error {status}: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn test_client(server: &MockServer) -> GrafanaClient {
        GrafanaClientBuilder::new(server.uri())
            .unwrap()
            .with_api_key("test-key")
            .with_org_id(3)
            .build()
            .unwrap()
    }

    fn dashboard_body() -> Value {
        json!({
            "meta": {
                "type": "db",
                "canSave": true,
                "slug": "hosts",
                "created": "2021-03-31T10:12:05Z",
                "version": 4
            },
            "dashboard": {
                "id": 7,
                "uid": "hosts",
                "title": "Hosts",
                "panels": [
                    {"id": 1, "type": "graph", "title": "Load", "targets": [{"refId": "A", "expr": "node_load1"}]},
                    {"id": 2, "type": "stat", "title": "Up", "options": {"colorMode": "value"}}
                ],
                "schemaVersion": 27,
                "version": 4
            }
        })
    }

    #[tokio::test]
    async fn get_dashboard_by_uid_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboards/uid/hosts"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("x-grafana-org-id", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let (board, meta) = client.get_dashboard_by_uid("hosts").await.unwrap();
        assert_eq!(board.title, "Hosts");
        assert_eq!(board.panels.len(), 2);
        assert!(board.panels[1].is_custom());
        assert_eq!(meta.slug, "hosts");
        assert_eq!(meta.version, 4);
        assert!(meta.created.is_some());
    }

    #[tokio::test]
    async fn get_dashboard_reports_field_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboards/uid/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": {},
                "dashboard": {"panels": [{"type": "graph", "targets": [{"refId": 5}]}]}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_dashboard_by_uid("broken").await.unwrap_err();
        match err {
            Error::FieldTypeMismatch { path, .. } => assert_eq!(path, "panels.0.targets.0.refId"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_dashboard_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboards/uid/cut"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"meta": {}, "dashboard": {"#))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_dashboard_by_uid("cut").await.unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[tokio::test]
    async fn get_dashboard_deeply_nested_rows() {
        let mut panel = json!({"id": 500, "type": "text", "title": "Bottom"});
        for level in (1..=90).rev() {
            panel = json!({"id": level, "type": "row", "collapsed": true, "panels": [panel]});
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboards/uid/deep"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": {"slug": "deep"},
                "dashboard": {"uid": "deep", "panels": [panel]}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let (board, _) = client.get_dashboard_by_uid("deep").await.unwrap();
        assert_eq!(board.max_panel_id(), 500);

        let (raw, _) = client.get_raw_dashboard_by_uid("deep").await.unwrap();
        assert_eq!(raw.decode().unwrap(), board);
    }

    #[tokio::test]
    async fn get_raw_dashboard_keeps_bytes() {
        let server = MockServer::start().await;
        let dashboard = r#"{"title":"Raw","zeta":1,"alpha":[1,2],"panels":[{"type":"x"}]}"#;
        Mock::given(method("GET"))
            .and(path("/api/dashboards/uid/raw"))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                r#"{{"meta":{{"slug":"raw"}},"dashboard":{dashboard}}}"#
            )))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let (raw, meta) = client.get_raw_dashboard_by_uid("raw").await.unwrap();
        assert_eq!(raw.get(), dashboard);
        assert_eq!(meta.slug, "raw");
    }

    #[tokio::test]
    async fn uid_is_path_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/dashboards/uid/a%20b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": "Spaced",
                "message": "Dashboard Spaced deleted",
                "id": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let status = client.delete_dashboard_by_uid("a b").await.unwrap();
        assert_eq!(status.id, Some(3));
        assert_eq!(status.title.as_deref(), Some("Spaced"));

        let err = client.delete_dashboard_by_uid("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn set_dashboard_drops_id_without_overwrite() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "dashboard": {"title": "New"},
                "folderUid": "ops",
                "overwrite": false,
                "message": "first"
            })))
            .respond_with(|request: &Request| {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                let status = if body["dashboard"].get("id").is_some() { 400 } else { 200 };
                ResponseTemplate::new(status).set_body_json(json!({
                    "id": 12,
                    "uid": "new",
                    "url": "/d/new/new",
                    "status": "success",
                    "version": 1,
                    "slug": "new"
                }))
            })
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let board = Board {
            id: Some(99),
            title: "New".to_string(),
            ..Board::default()
        };
        let params = SetDashboardParams::new()
            .with_folder_uid("ops")
            .with_message("first");
        let status = client.set_dashboard(&board, &params).await.unwrap();
        assert_eq!(status.status.as_deref(), Some("success"));
        assert_eq!(status.uid.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn set_raw_dashboard_forwards_document() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .and(body_partial_json(json!({
                "dashboard": {"id": 5, "title": "Raw", "futureKey": {"a": 1}},
                "overwrite": true,
                "folderId": 4
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success", "version": 2})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let raw = RawBoard::from_slice(br#"{"id":5,"title":"Raw","futureKey":{"a":1}}"#).unwrap();
        let params = SetDashboardParams::new().with_overwrite(true).with_folder_id(4);
        let status = client.set_raw_dashboard(&raw, &params).await.unwrap();
        assert_eq!(status.version, Some(2));
    }

    #[tokio::test]
    async fn search_dashboards_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("query", "load"))
            .and(query_param("type", "dash-db"))
            .and(query_param("tag", "prod"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 7,
                    "uid": "hosts",
                    "title": "Hosts load",
                    "uri": "db/hosts-load",
                    "url": "/d/hosts/hosts-load",
                    "type": "dash-db",
                    "tags": ["prod"],
                    "isStarred": false,
                    "folderId": 2,
                    "folderTitle": "Ops"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = SearchParams::dashboards("load").with_tag("prod");
        let found = client.search_dashboards(&params).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].uid, "hosts");
        assert_eq!(found[0].folder_title.as_deref(), Some("Ops"));
    }

    #[tokio::test]
    async fn status_codes_map_to_errors() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let cases: [(u16, fn(&Error) -> bool); 7] = [
            (404, |e| matches!(e, Error::NotFound(m) if m == "Dashboard not found")),
            (401, |e| matches!(e, Error::Unauthorized(_))),
            (403, |e| matches!(e, Error::Unauthorized(_))),
            (409, |e| matches!(e, Error::Conflict(_))),
            (412, |e| matches!(e, Error::PreconditionFailed(m) if m == "Dashboard not found")),
            (502, |e| matches!(e, Error::ServiceUnavailable(_))),
            (400, |e| matches!(e, Error::HttpError(_))),
        ];

        for (code, check) in cases {
            server.reset().await;
            Mock::given(method("GET"))
                .and(path("/api/dashboards/uid/any"))
                .respond_with(
                    ResponseTemplate::new(code).set_body_json(json!({"message": "Dashboard not found"})),
                )
                .expect(1)
                .mount(&server)
                .await;

            let err = client.get_dashboard_by_uid("any").await.unwrap_err();
            assert!(check(&err), "status {code} mapped to {err:?}");
        }
    }

    #[tokio::test]
    async fn basic_auth_and_sub_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/grafana/api/search"))
            .and(header("authorization", "Basic YWRtaW46YWRtaW4="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = GrafanaClientBuilder::new(format!("{}/grafana", server.uri()))
            .unwrap()
            .with_basic_auth("admin", "admin")
            .build()
            .unwrap();
        let found = client.search_dashboards(&SearchParams::default()).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn from_config_applies_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(header("authorization", "Bearer config-key"))
            .and(header("x-grafana-org-id", "9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = GrafanaClientConfig::new(server.uri())
            .unwrap()
            .with_api_key("config-key")
            .with_basic_auth("ignored", "ignored")
            .with_org_id(9);
        let client = GrafanaClient::from_config(&config).unwrap();
        client.search_dashboards(&SearchParams::default()).await.unwrap();
    }

    #[test]
    fn invalid_base_url() {
        assert!(matches!(
            GrafanaClient::new("not a url"),
            Err(Error::ConfigError(_))
        ));
    }
}

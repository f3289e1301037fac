//! Main client implementation

use crate::{
    types::*,
    ClientError, Config, Result,
};
use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

/// PutPut API client.
///
/// Holds the base URL and bearer token, serializes requests, and maps
/// responses and errors into typed results. One method per remote operation;
/// the upload flow lives in [`crate::upload`].
pub struct PutPutClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PutPutClient {
    /// Create a new client with the given configuration.
    /// Trailing slashes are stripped from the base URL.
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let user_agent = header::HeaderValue::from_str(&config.user_agent).unwrap_or_else(|_| {
            header::HeaderValue::from_static(concat!("putput-client/", env!("CARGO_PKG_VERSION")))
        });
        headers.insert(header::USER_AGENT, user_agent);

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    /// Create with default configuration: production origin, no token
    pub fn default_production() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Create with a base URL override
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(Config::new(base_url))
    }

    /// Set or replace the bearer token after construction.
    /// Call this after [`Self::create_guest_token`] to authenticate subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ==================== Auth ====================

    /// Create a guest token. No authentication required.
    /// Guest accounts carry fixed storage, file-size, and file-count limits and
    /// expire unless claimed via the returned claim URL.
    #[instrument(skip(self))]
    pub async fn create_guest_token(&self) -> Result<GuestTokenResponse> {
        self.request_json(Method::POST, "/api/v1/auth/guest", &[], None)
            .await
    }

    // ==================== Files ====================

    /// List uploaded files with cursor-based pagination and optional filters.
    #[instrument(skip(self))]
    pub async fn list_files(&self, options: Option<ListFilesOptions>) -> Result<FilePage> {
        self.require_token()?;
        let opts = options.unwrap_or_default();

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(cursor) = &opts.cursor {
            query.push(("cursor", cursor.clone()));
        }
        if let Some(prefix) = &opts.prefix {
            query.push(("prefix", prefix.clone()));
        }
        if let Some(project_id) = opts.project_id {
            query.push(("project_id", project_id.to_string()));
        }
        if let Some(tag) = &opts.tag {
            query.push(("tag", tag.clone()));
        }
        if let Some(limit) = opts.limit {
            query.push(("limit", limit.to_string()));
        }

        self.request_json(Method::GET, "/api/v1/files", &query, None)
            .await
    }

    /// Get a download URL for a file. Public files return the CDN URL; private
    /// files return a time-limited presigned URL.
    #[instrument(skip(self))]
    pub async fn download_file(&self, id: Uuid) -> Result<DownloadResult> {
        self.require_token()?;
        self.request_json(
            Method::GET,
            &format!("/api/v1/files/{id}/download"),
            &[],
            None,
        )
        .await
    }

    /// Get stats for a file: download count, size, visibility, creation date.
    #[instrument(skip(self))]
    pub async fn file_stats(&self, id: Uuid) -> Result<FileStats> {
        self.require_token()?;
        self.request_json(Method::GET, &format!("/api/v1/files/{id}/stats"), &[], None)
            .await
    }

    /// Delete a file by ID. Permanent; cannot be undone.
    #[instrument(skip(self))]
    pub async fn delete_file(&self, id: Uuid) -> Result<()> {
        self.require_token()?;
        self.request_empty(Method::DELETE, &format!("/api/v1/files/{id}"), &[], None)
            .await
    }

    // ==================== Dashboard ====================

    /// Get the account activity log, newest first, with cursor-based pagination.
    #[instrument(skip(self))]
    pub async fn get_activity(&self, options: Option<ActivityOptions>) -> Result<ActivityPage> {
        self.require_token()?;
        let opts = options.unwrap_or_default();

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(cursor) = &opts.cursor {
            query.push(("cursor", cursor.clone()));
        }
        if let Some(limit) = opts.limit {
            query.push(("limit", limit.to_string()));
        }

        self.request_json(Method::GET, "/api/v1/dashboard/activity", &query, None)
            .await
    }

    /// List all webhooks configured on this account.
    #[instrument(skip(self))]
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>> {
        self.require_token()?;
        let envelope: WebhookListEnvelope = self
            .request_json(Method::GET, "/api/v1/dashboard/webhooks", &[], None)
            .await?;
        Ok(envelope.webhooks)
    }

    /// Create a webhook. The URL receives POST requests when the given events
    /// occur; omitting `events` subscribes to all of them.
    #[instrument(skip(self))]
    pub async fn create_webhook(&self, url: &str, events: Option<Vec<String>>) -> Result<Webhook> {
        self.require_token()?;

        let mut body = serde_json::json!({ "url": url });
        if let Some(events) = events {
            body["events"] = serde_json::json!(events);
        }

        let envelope: WebhookEnvelope = self
            .request_json(Method::POST, "/api/v1/dashboard/webhooks", &[], Some(body))
            .await?;
        Ok(envelope.webhook)
    }

    /// Delete a webhook by ID. Stops all future event deliveries to that URL.
    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, id: Uuid) -> Result<()> {
        self.require_token()?;
        self.request_empty(
            Method::DELETE,
            &format!("/api/v1/dashboard/webhooks/{id}"),
            &[],
            None,
        )
        .await
    }

    /// List all projects in this account.
    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.require_token()?;
        let envelope: ProjectListEnvelope = self
            .request_json(Method::GET, "/api/v1/dashboard/projects", &[], None)
            .await?;
        Ok(envelope.projects)
    }

    /// Create a project for organizing files.
    #[instrument(skip(self))]
    pub async fn create_project(&self, name: &str) -> Result<Project> {
        self.require_token()?;
        let body = serde_json::json!({ "name": name });
        let envelope: ProjectEnvelope = self
            .request_json(Method::POST, "/api/v1/dashboard/projects", &[], Some(body))
            .await?;
        Ok(envelope.project)
    }

    /// Delete a project by ID. Files in the project are kept, only the grouping
    /// is removed.
    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: Uuid) -> Result<()> {
        self.require_token()?;
        self.request_empty(
            Method::DELETE,
            &format!("/api/v1/dashboard/projects/{id}"),
            &[],
            None,
        )
        .await
    }

    // ==================== Account ====================

    /// Export all account data: user profile, tokens, and files.
    #[instrument(skip(self))]
    pub async fn export_data(&self) -> Result<AccountExport> {
        self.require_token()?;
        self.request_json(Method::GET, "/api/v1/account/export", &[], None)
            .await
    }

    /// Permanently delete this account and all associated data (files, tokens,
    /// webhooks, projects). Cannot be undone. The client holds no persisted
    /// state, so there is nothing to clean up locally.
    #[instrument(skip(self))]
    pub async fn delete_account(&self) -> Result<()> {
        self.require_token()?;
        self.request_empty(Method::DELETE, "/api/v1/account", &[], None)
            .await
    }

    // ==================== Helper Methods ====================

    /// Fail fast, before any network call, when no token is set.
    pub(crate) fn require_token(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(ClientError::MissingToken);
        }
        Ok(())
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Issue a request and normalize the response. Attaches the bearer header
    /// when a token is present and a JSON content type only when a body is
    /// present. `Ok(None)` means a legitimate empty result.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), &url);

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(token) = &self.token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(json) = &body {
            req = req.json(json);
        }

        debug!("sending {} request to {}", method, url);
        let response = req.send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        normalize_response(status, &bytes)
    }

    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T> {
        match self.request(method, path, query, body).await? {
            Some(json) => {
                serde_json::from_value(json).map_err(|e| ClientError::InvalidResponse(e.to_string()))
            }
            None => Err(ClientError::InvalidResponse(
                "expected a response body".to_string(),
            )),
        }
    }

    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<()> {
        self.request(method, path, query, body).await?;
        Ok(())
    }
}

/// Normalize a response body against its status.
///
/// 204 is a successful empty result. Everything else falls into one of the
/// four parse-success x http-success combinations, kept as a single exhaustive
/// match so each case stays visible:
///
/// - unparseable body, failure status: placeholder error with the raw status
/// - unparseable body, success status: empty result (some operations
///   legitimately return no body)
/// - parsed body, failure status: error from the conventional envelope
/// - parsed body, success status: the body verbatim, for callers to narrow
fn normalize_response(status: StatusCode, body: &[u8]) -> Result<Option<Value>> {
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let parsed: std::result::Result<Value, _> = serde_json::from_slice(body);
    match (parsed, status.is_success()) {
        (Err(_), false) => Err(ClientError::unknown(status.as_u16())),
        (Err(_), true) => Ok(None),
        (Ok(json), false) => Err(ClientError::from_envelope(status.as_u16(), &json)),
        (Ok(json), true) => Ok(Some(json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_content_is_empty_success() {
        let result = normalize_response(StatusCode::NO_CONTENT, b"").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unparseable_failure_yields_placeholder_error() {
        let error = normalize_response(StatusCode::BAD_GATEWAY, b"<html>upstream</html>")
            .unwrap_err();
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.code(), Some("UNKNOWN_ERROR"));
    }

    #[test]
    fn test_unparseable_success_is_empty_result() {
        let result = normalize_response(StatusCode::OK, b"").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_parsed_failure_uses_envelope() {
        let body = json!({
            "error": { "code": "NOT_FOUND", "message": "No such file.", "hint": "Check the id." }
        });
        let error =
            normalize_response(StatusCode::NOT_FOUND, body.to_string().as_bytes()).unwrap_err();
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.code(), Some("NOT_FOUND"));
        assert_eq!(error.hint(), Some("Check the id."));
    }

    #[test]
    fn test_parsed_success_returns_body_verbatim() {
        let body = json!({ "files": [], "cursor": null, "has_more": false });
        let result = normalize_response(StatusCode::OK, body.to_string().as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_base_url_trailing_slashes_stripped() {
        let client = PutPutClient::new(Config::new("https://putput.io///")).unwrap();
        assert_eq!(client.base_url(), "https://putput.io");
    }
}

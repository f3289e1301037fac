//! Data-transfer types for the PutPut API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// File visibility
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Served from the public CDN URL
    Public,
    /// Reachable only through time-limited presigned download URLs
    Private,
}

/// Resource limits attached to a guest account
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuestLimits {
    /// Maximum total storage in bytes
    pub storage_bytes: u64,
    /// Maximum size of a single file in bytes
    pub max_file_size_bytes: u64,
    /// Maximum number of files
    pub max_files: u64,
    /// When the guest account and its files expire
    pub expires_at: DateTime<Utc>,
}

/// Response from guest token creation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuestTokenResponse {
    /// The guest bearer token (starts with `pp_guest_`)
    pub token: String,
    /// URL where the guest can claim (upgrade) the account
    pub claim_url: String,
    /// Resource limits for this guest account
    pub limits: GuestLimits,
}

/// A file stored in PutPut
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique file identifier
    pub id: Uuid,
    /// Original filename as provided during upload
    pub original_name: String,
    /// Server-assigned unique filename used in the CDN URL
    pub public_name: String,
    /// Public CDN URL; `None` for private files
    pub public_url: Option<String>,
    /// MIME type
    pub content_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// File visibility
    pub visibility: Visibility,
    /// Path prefix for organization; `None` if no prefix was set
    pub prefix: Option<String>,
    /// User-defined key-value metadata
    pub metadata: Option<HashMap<String, String>>,
    /// User-defined tags
    pub tags: Option<Vec<String>>,
    /// Number of times this file has been downloaded
    pub download_count: u64,
    /// Short URL for sharing; `None` if not generated
    pub short_url: Option<String>,
    /// When this file expires and will be deleted; `None` if it does not expire
    pub expires_at: Option<DateTime<Utc>>,
    /// When this file was uploaded
    pub created_at: DateTime<Utc>,
}

/// One page of files
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilePage {
    /// Files matching the query
    pub files: Vec<FileRecord>,
    /// Opaque cursor for fetching the next page; `None` if there are no more pages
    #[serde(default)]
    pub cursor: Option<String>,
    /// Whether there are more files beyond this page
    pub has_more: bool,
}

/// Optional settings for an upload
#[derive(Clone, Debug, Default)]
pub struct UploadOptions {
    /// File visibility (server defaults to public)
    pub visibility: Option<Visibility>,
    /// Path prefix for organizing files (e.g. `"avatars"`)
    pub prefix: Option<String>,
    /// Key-value metadata attached to the file (max 10 keys)
    pub metadata: Option<HashMap<String, String>>,
    /// Tags for categorization and filtering (max 10 tags)
    pub tags: Option<Vec<String>>,
    /// When the file should be automatically deleted
    pub expires_at: Option<DateTime<Utc>>,
}

impl UploadOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Set the path prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add a metadata key-value pair
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    /// Set the expiry time
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// Optional settings for an upload-from-URL request
#[derive(Clone, Debug, Default)]
pub struct UploadFromUrlOptions {
    /// Override the filename (otherwise inferred from the URL path)
    pub filename: Option<String>,
    /// Override the MIME content type (otherwise inferred by the server)
    pub content_type: Option<String>,
    /// File visibility (server defaults to public)
    pub visibility: Option<Visibility>,
    /// Path prefix for organizing files
    pub prefix: Option<String>,
    /// Key-value metadata attached to the file
    pub metadata: Option<HashMap<String, String>>,
    /// Tags for categorization and filtering
    pub tags: Option<Vec<String>>,
    /// When the file should be automatically deleted
    pub expires_at: Option<DateTime<Utc>>,
}

impl UploadFromUrlOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the filename
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Override the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }
}

/// Result of a completed upload
#[derive(Clone, Debug)]
pub struct UploadResult {
    /// Unique file identifier
    pub id: Uuid,
    /// Public CDN URL; `None` for private files
    pub url: Option<String>,
    /// Original filename as provided during upload
    pub original_name: String,
    /// Server-assigned unique filename used in the CDN URL
    pub public_name: String,
    /// MIME type
    pub content_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// File visibility
    pub visibility: Visibility,
    /// Short URL for sharing; `None` if not generated
    pub short_url: Option<String>,
    /// Tags assigned to this file
    pub tags: Option<Vec<String>>,
    /// Metadata assigned to this file
    pub metadata: Option<HashMap<String, String>>,
}

impl From<FileRecord> for UploadResult {
    fn from(file: FileRecord) -> Self {
        Self {
            id: file.id,
            url: file.public_url,
            original_name: file.original_name,
            public_name: file.public_name,
            content_type: file.content_type,
            size_bytes: file.size_bytes,
            visibility: file.visibility,
            short_url: file.short_url,
            tags: file.tags,
            metadata: file.metadata,
        }
    }
}

/// Options for listing files
#[derive(Clone, Debug, Default)]
pub struct ListFilesOptions {
    /// Opaque cursor from a previous page
    pub cursor: Option<String>,
    /// Filter by prefix
    pub prefix: Option<String>,
    /// Filter by project
    pub project_id: Option<Uuid>,
    /// Filter by tag
    pub tag: Option<String>,
    /// Files per page (1-100, server defaults to 50)
    pub limit: Option<u32>,
}

/// Options for fetching the activity log
#[derive(Clone, Debug, Default)]
pub struct ActivityOptions {
    /// Opaque cursor from a previous page
    pub cursor: Option<String>,
    /// Entries per page
    pub limit: Option<u32>,
}

/// Result of a download-link request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadResult {
    /// CDN URL for public files, time-limited presigned URL for private files
    pub download_url: String,
    /// When the presigned URL expires; only present for private files
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Stats for a single file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileStats {
    /// Unique file identifier
    pub id: Uuid,
    /// Total number of downloads
    pub download_count: u64,
    /// Size in bytes
    pub size_bytes: u64,
    /// File visibility
    pub visibility: Visibility,
    /// When this file was uploaded
    pub created_at: DateTime<Utc>,
}

/// A single entry in the account activity log
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Unique activity entry identifier
    pub id: String,
    /// Action performed (e.g. `"upload"`, `"delete"`, `"download"`)
    pub action: String,
    /// ID of the resource involved; `None` for account-level actions
    pub resource_id: Option<String>,
    /// IP address that initiated the action; `None` if not recorded
    pub ip_address: Option<String>,
    /// When the action occurred
    pub created_at: DateTime<Utc>,
}

/// One page of activity entries, newest first
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityPage {
    /// Activity entries
    pub activity: Vec<ActivityItem>,
    /// Opaque cursor for fetching the next page; `None` if there are no more pages
    #[serde(default)]
    pub cursor: Option<String>,
    /// Whether there are more entries beyond this page
    pub has_more: bool,
}

/// A webhook configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Webhook {
    /// Unique webhook identifier
    pub id: Uuid,
    /// URL that receives webhook POST requests
    pub url: String,
    /// Event types this webhook is subscribed to
    pub events: Vec<String>,
    /// Whether this webhook is currently active
    pub active: bool,
    /// When this webhook was created
    pub created_at: DateTime<Utc>,
}

/// A project for organizing files
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: Uuid,
    /// Human-readable project name
    pub name: String,
    /// When this project was created
    pub created_at: DateTime<Utc>,
}

/// Full account data export. The server does not commit to a schema for the
/// nested objects, so they are relayed verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountExport {
    /// User profile information
    pub user: serde_json::Value,
    /// All API tokens associated with the account
    pub tokens: Vec<serde_json::Value>,
    /// All files associated with the account
    pub files: Vec<serde_json::Value>,
}

// Wire envelopes. Single resources arrive wrapped in a named key.

#[derive(Debug, Deserialize)]
pub(crate) struct PresignResponse {
    pub upload_id: String,
    pub presigned_url: String,
    pub public_name: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileEnvelope {
    pub file: FileRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebhookEnvelope {
    pub webhook: Webhook,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebhookListEnvelope {
    pub webhooks: Vec<Webhook>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectEnvelope {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectListEnvelope {
    pub projects: Vec<Project>,
}

//! Upload flows: the three-step presigned upload, upload-from-URL, and a
//! filesystem convenience wrapper.
//!
//! The three-step flow never routes file bytes through the primary API:
//! presign issues a time-limited direct-upload target, the bytes go straight
//! to it, and confirm finalizes the record. Presigned URLs are single-use, so
//! no step is retried; a failure anywhere aborts the whole operation and the
//! caller retries the full sequence.

use crate::{types::*, ClientError, PutPutClient, Result};
use bytes::Bytes;
use reqwest::{header, Method};
use serde_json::{json, Value};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

impl PutPutClient {
    /// Upload a file. Handles the full three-step flow:
    ///
    /// 1. `POST /api/v1/upload/presign` to get a presigned upload target
    /// 2. `PUT` the raw bytes directly to that target
    /// 3. `POST /api/v1/upload/confirm` to finalize and get the file record
    ///
    /// `content_type` defaults to `application/octet-stream` when `None`.
    #[instrument(skip(self, data, options))]
    pub async fn upload(
        &self,
        data: impl Into<Bytes>,
        filename: &str,
        content_type: Option<&str>,
        options: Option<UploadOptions>,
    ) -> Result<UploadResult> {
        self.require_token()?;

        let data = data.into();
        let content_type = content_type.unwrap_or(DEFAULT_CONTENT_TYPE);
        let opts = options.unwrap_or_default();

        let presign = self
            .presign(filename, content_type, data.len() as u64, &opts)
            .await?;
        self.transfer(&presign.presigned_url, content_type, data)
            .await?;
        let file = self.confirm(&presign.upload_id).await?;

        Ok(UploadResult::from(file))
    }

    /// Upload a file from a URL. The server fetches the bytes itself, so no
    /// local download or presign round trip is involved.
    #[instrument(skip(self, options))]
    pub async fn upload_from_url(
        &self,
        url: &str,
        options: Option<UploadFromUrlOptions>,
    ) -> Result<UploadResult> {
        self.require_token()?;
        let opts = options.unwrap_or_default();

        let mut body = json!({ "url": url });
        if let Some(filename) = &opts.filename {
            body["filename"] = json!(filename);
        }
        if let Some(content_type) = &opts.content_type {
            body["content_type"] = json!(content_type);
        }
        append_common_fields(
            &mut body,
            opts.visibility,
            &opts.prefix,
            &opts.metadata,
            &opts.tags,
            &opts.expires_at,
        );

        let envelope: FileEnvelope = self
            .request_json(Method::POST, "/api/v1/upload/url", &[], Some(body))
            .await?;
        Ok(UploadResult::from(envelope.file))
    }

    /// Upload a file from the local filesystem. The filename is taken from the
    /// path and the content type is guessed from the extension.
    #[instrument(skip(self, options))]
    pub async fn upload_path(
        &self,
        path: impl AsRef<Path> + std::fmt::Debug,
        options: Option<UploadOptions>,
    ) -> Result<UploadResult> {
        self.require_token()?;

        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file.bin");
        let content_type = mime_guess::from_path(path).first_or_octet_stream();

        self.upload(data, filename, Some(content_type.as_ref()), options)
            .await
    }

    // ==================== Steps ====================

    async fn presign(
        &self,
        filename: &str,
        content_type: &str,
        size_bytes: u64,
        opts: &UploadOptions,
    ) -> Result<PresignResponse> {
        let mut body = json!({
            "filename": filename,
            "content_type": content_type,
            "size_bytes": size_bytes,
        });
        append_common_fields(
            &mut body,
            opts.visibility,
            &opts.prefix,
            &opts.metadata,
            &opts.tags,
            &opts.expires_at,
        );

        let presign: PresignResponse = self
            .request_json(Method::POST, "/api/v1/upload/presign", &[], Some(body))
            .await?;
        debug!(
            upload_id = %presign.upload_id,
            public_name = %presign.public_name,
            url_expires_at = %presign.expires_at,
            "presigned upload target issued"
        );
        Ok(presign)
    }

    /// PUT the raw bytes to the presigned target. No bearer header; the
    /// presigned URL is its own credential.
    async fn transfer(&self, presigned_url: &str, content_type: &str, data: Bytes) -> Result<()> {
        debug!("transferring {} bytes to presigned target", data.len());
        let response = self
            .http()
            .put(presigned_url)
            .header(header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::TransferFailed {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn confirm(&self, upload_id: &str) -> Result<FileRecord> {
        let body = json!({ "upload_id": upload_id });
        let envelope: FileEnvelope = self
            .request_json(Method::POST, "/api/v1/upload/confirm", &[], Some(body))
            .await?;
        Ok(envelope.file)
    }
}

/// Insert the optional fields shared by presign and upload-from-URL bodies.
/// Absent options never reach the wire, not even as null.
fn append_common_fields(
    body: &mut Value,
    visibility: Option<Visibility>,
    prefix: &Option<String>,
    metadata: &Option<std::collections::HashMap<String, String>>,
    tags: &Option<Vec<String>>,
    expires_at: &Option<chrono::DateTime<chrono::Utc>>,
) {
    if let Some(visibility) = visibility {
        body["visibility"] = json!(visibility);
    }
    if let Some(prefix) = prefix {
        body["prefix"] = json!(prefix);
    }
    if let Some(metadata) = metadata {
        body["metadata"] = json!(metadata);
    }
    if let Some(tags) = tags {
        body["tags"] = json!(tags);
    }
    if let Some(expires_at) = expires_at {
        body["expires_at"] = json!(expires_at);
    }
}

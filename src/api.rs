// API client module: contains a small blocking HTTP client that sends the
// selected images to the upload endpoint in a single multipart request.
// It is intentionally small and synchronous; there is exactly one outgoing
// call per run and nothing to parallelize.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Production upload endpoint. Can be overridden with the `UPLOAD_URL`
/// environment variable (useful for pointing at a staging server or the
/// test harness); the interactive flow has no flags.
pub const DEFAULT_UPLOAD_URL: &str = "https://davispics.com/upload/";

/// Upper bound on the whole request, response included. Large batches over
/// slow links can legitimately take minutes.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Client that holds a configured reqwest blocking client and the endpoint
/// URL. Built once in `main` and consumed by the UI flow.
pub struct UploadClient {
    client: Client,
    upload_url: String,
}

/// Error payload the server returns on rejection, e.g.
/// `{"message": "Invalid maxDimension value"}`. Only `message` is read.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl UploadClient {
    /// Create a client pointed at `upload_url` with the fixed timeout.
    pub fn new(upload_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(UploadClient {
            client,
            upload_url: upload_url.to_string(),
        })
    }

    /// Create a client configured from the environment variable `UPLOAD_URL`
    /// or fall back to the production endpoint.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("UPLOAD_URL").unwrap_or_else(|_| DEFAULT_UPLOAD_URL.into());
        Self::new(&url)
    }

    /// Upload the selected files in one multipart/form-data POST.
    ///
    /// The form carries two scalar fields, `maxDimension` and `folder`
    /// (empty folder means the server root), plus one `images` part per
    /// file. `max_dimension` is forwarded as-is; any resizing happens on
    /// the server, never here.
    ///
    /// All files are read into memory before anything is sent: if any one
    /// of them cannot be read, no request goes out at all. Partial file
    /// lists are never uploaded. No retries on any failure.
    pub fn upload_images(
        &self,
        files: &[PathBuf],
        max_dimension: u32,
        folder: &str,
    ) -> Result<()> {
        let mut parts = Vec::with_capacity(files.len());
        for path in files {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read file {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("image.jpg")
                .to_string();
            parts.push((file_name, bytes));
        }

        let mut form = multipart::Form::new()
            .text("maxDimension", max_dimension.to_string())
            .text("folder", folder.to_string());
        for (file_name, bytes) in parts {
            // The server only checks the label, so every part is tagged
            // image/jpeg regardless of extension, matching the historical
            // uploader behavior.
            let part = multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("image/jpeg")
                .context("Failed to build multipart file part")?;
            form = form.part("images", part);
        }

        let res = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .map_err(|e| anyhow::anyhow!("Network error occurred: {}", e))?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        // Prefer the structured message the server sends; fall back to the
        // bare status code when the body is not the expected JSON.
        let text = res.text().unwrap_or_default();
        let msg = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("Upload failed with status {}", status.as_u16()));
        bail!("{}", msg)
    }
}

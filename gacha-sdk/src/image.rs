use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{header::CONTENT_TYPE, Client};

use crate::errors::SdkErrors;

/// Turns card image references into `data:` URLs.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: Client,
    asset_dir: PathBuf,
}

impl ImageLoader {
    pub fn new(client: Client, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            asset_dir: asset_dir.into(),
        }
    }

    /// `data:` references pass through, `http(s)` ones are downloaded and anything
    /// else is read relative to the asset directory.
    pub async fn data_url(&self, reference: &str) -> Result<String, SdkErrors> {
        if reference.starts_with("data:") {
            return Ok(reference.to_string());
        }
        let (mime, bytes) = if reference.starts_with("http://") || reference.starts_with("https://") {
            let response = self.client.get(reference).send().await?;
            if !response.status().is_success() {
                return Err(SdkErrors::ImageError(format!(
                    "{reference} ({})",
                    response.status()
                )));
            }
            let mime = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .unwrap_or_else(|| mime_for(Path::new(reference)).to_string());
            (mime, response.bytes().await?.to_vec())
        } else {
            let path = self.asset_dir.join(reference.trim_start_matches('/'));
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| SdkErrors::ImageError(format!("{} ({e})", path.display())))?;
            (mime_for(&path).to_string(), bytes)
        };
        Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }
}

pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

//! Image blob download from cloud object storage.

use image::RgbImage;
use reqwest::Client;

use crate::error::FetchError;

/// Pre-signed blob URLs carry a SAS token starting at this marker and need
/// no further authorization.
const SAS_MARKER: &str = "?skoid=";

/// Env var consulted for ambient storage credentials on unsigned paths.
const ACCESS_TOKEN_VAR: &str = "BLOB_ACCESS_TOKEN";

/// Downloads a blob and decodes it as an image.
///
/// `blob_path` is either a pre-signed URL (fetched as-is) or an
/// `<account-host>/<container>/<blob-name>` path, in which case ambient
/// credentials from the environment are attached. All failures are logged
/// and returned as values.
pub async fn download_image_blob(blob_path: &str) -> Result<RgbImage, FetchError> {
    let client = Client::new();

    let request = if blob_path.contains(SAS_MARKER) {
        client.get(blob_path)
    } else {
        let url = unsigned_blob_url(blob_path)?;
        let request = client.get(&url);
        match std::env::var(ACCESS_TOKEN_VAR) {
            Ok(token) => request.bearer_auth(token),
            Err(_) => request,
        }
    };

    let response = request
        .send()
        .await
        .map_err(|e| download_error(blob_path, e.to_string()))?;
    if !response.status().is_success() {
        return Err(download_error(
            blob_path,
            format!("status {}", response.status()),
        ));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| download_error(blob_path, e.to_string()))?;

    let image = image::load_from_memory(&bytes).map_err(|e| {
        let err = FetchError::ImageDecode {
            path: blob_path.to_string(),
            reason: e.to_string(),
        };
        log::error!("{err}");
        err
    })?;

    Ok(image.to_rgb8())
}

/// Splits an unsigned blob path into (account host, container, blob name)
/// and rebuilds the https URL.
fn unsigned_blob_url(blob_path: &str) -> Result<String, FetchError> {
    let splits: Vec<&str> = blob_path.split('/').collect();
    if splits.len() < 3 {
        return Err(download_error(
            blob_path,
            "expected <account-host>/<container>/<blob-name>".to_string(),
        ));
    }
    let account = splits[splits.len() - 3];
    let container = splits[splits.len() - 2];
    let blob_name = splits[splits.len() - 1];
    Ok(format!("https://{account}/{container}/{blob_name}"))
}

fn download_error(blob_path: &str, reason: String) -> FetchError {
    let err = FetchError::BlobDownload {
        path: blob_path.to_string(),
        reason,
    };
    log::error!("Failed to download image blob: {err}");
    err
}

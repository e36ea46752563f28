//! Blob-store upload client
//!
//! The admin upload page performs a client-driven handshake against an HTTP
//! endpoint: ask for an upload URL, PUT the bytes, get back the blob URL.
//! Every failure comes back as a typed error; callers log and move on, so a
//! broken upload never takes the page down. Each successful upload is paired
//! with the delivery-host URL the same file will have once mirrored there.

use std::time::Duration;

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::images::ImageResolver;
use crate::{Error, Result};

#[derive(Debug, Serialize)]
struct HandshakeRequest<'a> {
    pathname: &'a str,
    #[serde(rename = "contentType")]
    content_type: &'a str,
    size: u64,
}

#[derive(Debug, Deserialize)]
struct HandshakeResponse {
    #[serde(rename = "uploadUrl")]
    upload_url: String,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    url: String,
}

/// A successfully uploaded image
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// URL the blob store assigned
    pub blob_url: String,
    /// Equivalent URL on the image delivery host
    pub delivery_url: String,
}

/// Client for the blob-store upload handshake
pub struct BlobUploadClient {
    client: reqwest::blocking::Client,
    handshake_url: String,
    resolver: ImageResolver,
}

impl BlobUploadClient {
    pub fn new(handshake_url: &str, resolver: ImageResolver, timeout: Duration) -> Result<Self> {
        url::Url::parse(handshake_url)
            .map_err(|e| Error::Config(format!("invalid handshake URL: {}", e)))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(BlobUploadClient {
            client,
            handshake_url: handshake_url.to_string(),
            resolver,
        })
    }

    /// Upload one file: handshake, then PUT the bytes to the returned URL.
    pub fn upload(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<UploadedImage> {
        let handshake = HandshakeRequest {
            pathname: file_name,
            content_type: mime,
            size: bytes.len() as u64,
        };

        let res = self
            .client
            .post(&self.handshake_url)
            .json(&handshake)
            .send()
            .map_err(|e| Error::Network(format!("upload handshake failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(Error::Upload(format!(
                "handshake rejected with status {}",
                res.status()
            )));
        }

        let handshake: HandshakeResponse = res
            .json()
            .map_err(|e| Error::Upload(format!("malformed handshake response: {}", e)))?;

        let res = self
            .client
            .put(&handshake.upload_url)
            .header("Content-Type", mime)
            .body(bytes)
            .send()
            .map_err(|e| Error::Network(format!("byte transfer failed: {}", e)))?;

        if !res.status().is_success() {
            return Err(Error::Upload(format!(
                "byte transfer rejected with status {}",
                res.status()
            )));
        }

        let put: PutResponse = res
            .json()
            .map_err(|e| Error::Upload(format!("malformed upload response: {}", e)))?;

        Ok(UploadedImage {
            blob_url: put.url,
            delivery_url: self.resolver.resolve(file_name),
        })
    }

    /// Upload a batch, collecting successes. Individual failures are logged
    /// and skipped; the whole batch never aborts on one bad file.
    pub fn upload_many<'a, I>(&self, files: I) -> Vec<UploadedImage>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Vec<u8>)>,
    {
        let mut uploaded = Vec::new();
        for (name, mime, bytes) in files {
            match self.upload(name, mime, bytes) {
                Ok(image) => {
                    info!("uploaded {} -> {}", name, image.blob_url);
                    uploaded.push(image);
                }
                Err(e) => {
                    error!("Error uploading {}: {}", name, e);
                }
            }
        }
        uploaded
    }
}

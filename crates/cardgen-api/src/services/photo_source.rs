//! Image source resolution.
//!
//! Turns either a remote link or inline base64 bytes into a decoded,
//! color-normalized photo. Every acquisition failure - network errors,
//! non-success status, undecodable bytes - degrades to
//! [`PhotoInput::Failed`] so the pipeline draws an error placeholder
//! instead of failing the request.

use std::borrow::Cow;
use std::sync::OnceLock;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use regex::Regex;

use cardgen_core::constants::REMOTE_FETCH_USER_AGENT;
use cardgen_core::models::PhotoSource;
use cardgen_processing::{decode_photo, DecodedPhoto, PhotoDecodeError, PhotoInput};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("remote returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Decode(#[from] PhotoDecodeError),
}

/// Resolves photo sources. Holds the shared HTTP client with its bounded
/// timeout and browser-like User-Agent.
pub struct PhotoFetcher {
    client: reqwest::Client,
}

impl PhotoFetcher {
    pub fn new(timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(REMOTE_FETCH_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Resolve an optional photo source into the pipeline's photo input.
    pub async fn resolve(&self, source: Option<PhotoSource>) -> PhotoInput {
        match source {
            None => PhotoInput::Missing,
            Some(PhotoSource::RemoteLink(url)) => match self.fetch_remote(&url).await {
                Ok(photo) => PhotoInput::Decoded(photo),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Remote photo acquisition failed");
                    PhotoInput::Failed(format!("Image load error: {e}"))
                }
            },
            Some(PhotoSource::InlineBytes(encoded)) => match decode_inline(&encoded) {
                Ok(photo) => PhotoInput::Decoded(photo),
                Err(e) => {
                    tracing::warn!(error = %e, "Inline photo decoding failed");
                    PhotoInput::Failed(format!("Base64 error: {e}"))
                }
            },
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<DecodedPhoto, SourceError> {
        let url = to_direct_download_url(url);
        tracing::debug!(url = %url, "Downloading photo");

        let response = self.client.get(url.as_ref()).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }
        let data = response.bytes().await?;
        Ok(decode_photo(&data)?)
    }
}

/// Strip an optional `data:...;base64,` prefix and decode.
fn decode_inline(encoded: &str) -> Result<DecodedPhoto, SourceError> {
    let payload = match encoded.split_once(',') {
        Some((_, rest)) => rest,
        None => encoded,
    };
    let data = BASE64.decode(payload.trim())?;
    Ok(decode_photo(&data)?)
}

static DRIVE_FILE_ID: OnceLock<Regex> = OnceLock::new();

/// Rewrite a Google Drive share link into its direct-download form. Links
/// that are already direct, or not Drive links at all, pass through
/// unchanged.
pub fn to_direct_download_url(url: &str) -> Cow<'_, str> {
    if !url.contains("drive.google.com") {
        return Cow::Borrowed(url);
    }
    if url.contains("export=download") || url.contains("uc?id=") {
        return Cow::Borrowed(url);
    }

    let re = DRIVE_FILE_ID
        .get_or_init(|| Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").expect("valid literal regex"));
    match re.captures(url) {
        Some(caps) => Cow::Owned(format!(
            "https://drive.google.com/uc?export=download&id={}",
            &caps[1]
        )),
        None => Cow::Borrowed(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_base64() -> String {
        let img = RgbImage::from_pixel(8, 8, Rgb([5, 5, 5]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        BASE64.encode(buffer)
    }

    #[test]
    fn test_share_link_rewritten() {
        let url = "https://drive.google.com/file/d/1AbC-dEf_9/view?usp=sharing";
        assert_eq!(
            to_direct_download_url(url),
            "https://drive.google.com/uc?export=download&id=1AbC-dEf_9"
        );
    }

    #[test]
    fn test_direct_link_untouched() {
        let url = "https://drive.google.com/uc?export=download&id=1AbC";
        assert_eq!(to_direct_download_url(url), url);
    }

    #[test]
    fn test_other_hosts_untouched() {
        let url = "https://example.com/file/d/notdrive/photo.jpg";
        assert_eq!(to_direct_download_url(url), url);
    }

    #[test]
    fn test_decode_inline_bare_base64() {
        let photo = decode_inline(&png_base64()).unwrap();
        assert_eq!((photo.width, photo.height), (8, 8));
    }

    #[test]
    fn test_decode_inline_data_uri() {
        let encoded = format!("data:image/png;base64,{}", png_base64());
        let photo = decode_inline(&encoded).unwrap();
        assert_eq!((photo.width, photo.height), (8, 8));
    }

    #[test]
    fn test_decode_inline_invalid_base64() {
        assert!(decode_inline("!!not base64!!").is_err());
    }

    #[tokio::test]
    async fn test_resolve_missing_source() {
        let fetcher = PhotoFetcher::new(Duration::from_secs(1)).unwrap();
        assert!(matches!(
            fetcher.resolve(None).await,
            PhotoInput::Missing
        ));
    }

    #[tokio::test]
    async fn test_resolve_bad_inline_degrades() {
        let fetcher = PhotoFetcher::new(Duration::from_secs(1)).unwrap();
        let input = fetcher
            .resolve(Some(PhotoSource::InlineBytes("garbage!!".to_string())))
            .await;
        assert!(matches!(input, PhotoInput::Failed(_)));
    }
}

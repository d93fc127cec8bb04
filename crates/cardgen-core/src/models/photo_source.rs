//! Photo source variants.
//!
//! A composite request carries at most one photo source; the resolver turns
//! either variant into the same decoded, color-normalized photo downstream.

/// Where the reference photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// A remote URL, possibly in a cloud-storage share-link form that needs
    /// rewriting before download.
    RemoteLink(String),
    /// Base64-encoded bytes, with or without a `data:` URI prefix.
    InlineBytes(String),
}

impl PhotoSource {
    /// Pick the source from the two optional request fields. The remote URL
    /// takes priority when both are supplied; both absent means no photo.
    pub fn from_request(url: Option<String>, inline: Option<String>) -> Option<Self> {
        let non_empty = |s: String| {
            let s = s.trim().to_string();
            (!s.is_empty()).then_some(s)
        };
        if let Some(url) = url.and_then(non_empty) {
            return Some(PhotoSource::RemoteLink(url));
        }
        inline.and_then(non_empty).map(PhotoSource::InlineBytes)
    }
}

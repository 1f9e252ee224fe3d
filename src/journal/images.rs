//! Image input boundary.
//!
//! Uploaded photo bytes are embedded directly into the memory record as
//! `data:` URLs, so the store needs no side-channel for binary blobs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

/// Pattern accepted for embedded photo references.
const DATA_URL_PATTERN: &str = r"^data:image/[a-z0-9.+-]+;base64,[A-Za-z0-9+/]*={0,2}$";

/// Encode raw image bytes into an embeddable `data:` URL.
#[must_use]
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether a string is usable as a photo reference: an embedded image data
/// URL or a remote `http(s)` URL.
#[must_use]
pub fn looks_like_image_url(candidate: &str) -> bool {
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return true;
    }

    Regex::new(DATA_URL_PATTERN).is_ok_and(|re| re.is_match(candidate))
}

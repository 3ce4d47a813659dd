// Share codec - ShareState <-> base64 JSON carried in the `state` query parameter
use crate::domain::share::ShareState;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

pub const SHARE_PARAM: &str = "state";

#[derive(Debug, Error)]
pub enum ShareDecodeError {
    #[error("share state is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share state is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("share state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn encode(state: &ShareState) -> String {
    // Serializing plain strings and lists can't fail.
    let json = serde_json::to_string(state).unwrap_or_default();
    STANDARD.encode(json)
}

/// Inverse of [`encode`]. Spaces are read as `+`, which is what an unescaped
/// link looks like after query-string decoding.
pub fn decode(encoded: &str) -> Result<ShareState, ShareDecodeError> {
    let normalized: String = encoded
        .trim()
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    let bytes = STANDARD.decode(normalized)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// `<origin><pathname>?state=<encoded>` with the value percent-encoded.
pub fn share_url(origin: &str, pathname: &str, state: &ShareState) -> String {
    format!(
        "{}{}?{}={}",
        origin,
        pathname,
        SHARE_PARAM,
        urlencoding::encode(&encode(state))
    )
}

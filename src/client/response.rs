use reqwest::StatusCode;
use serde_json::{Map, Value};

use super::error::{Error, Result};

/// Decoded response body. No schema is imposed on it.
pub type Response = Map<String, Value>;

/// Maps a status and raw body onto the call result.
///
/// Upstream error payloads carried in a 2xx body (`{"error": {...}}`) are
/// returned as data, not turned into errors.
pub fn parse_response(status: StatusCode, body: String) -> Result<Response> {
    if !status.is_success() {
        return Err(Error::HttpStatus { status, body });
    }

    match serde_json::from_str(body.as_str()) {
        Ok(d) => Ok(d),
        Err(source) => Err(Error::Decode { source, body }),
    }
}

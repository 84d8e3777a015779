use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

use crate::error::Error;
use crate::headers::Headers;

/// The response the handler produces, encoded for the gateway as
/// `{"statusCode": ..}` plus `headers`/`body`/`isBase64Encoded` keys that are
/// only emitted when supplied.
///
/// When `is_base64_encoded` is `Some(true)` the body must already be valid
/// base64 text; nothing re-encodes it on the way out. [`Response::binary`]
/// takes care of that.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl Response {
    /// A response carrying only a status code.
    pub fn new(status_code: u16) -> Self {
        Response {
            status_code,
            headers: None,
            body: None,
            is_base64_encoded: None,
        }
    }

    /// A JSON response: serializes `payload` into the body and forces a
    /// `Content-Type: application/json` header on top of any caller headers.
    pub fn json<P: Serialize>(
        status_code: u16,
        headers: Option<Headers>,
        payload: &P,
    ) -> Result<Self, Error> {
        let mut headers = headers.unwrap_or_default();
        headers.add("Content-Type", "application/json");
        let body = serde_json::to_string(payload).map_err(Error::EncodeResponse)?;
        Ok(Response {
            status_code,
            headers: Some(headers),
            body: Some(body),
            is_base64_encoded: Some(false),
        })
    }

    /// A binary response: the body is the base64 text of `bytes`. Cannot
    /// fail, base64 encoding is total.
    pub fn binary(status_code: u16, headers: Option<Headers>, bytes: impl AsRef<[u8]>) -> Self {
        Response {
            status_code,
            headers,
            body: Some(BASE64.encode(bytes)),
            is_base64_encoded: Some(true),
        }
    }
}

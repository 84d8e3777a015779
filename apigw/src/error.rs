/// Fatal failures of the invocation codec, always propagated to the caller.
///
/// A failed user handler is deliberately not represented here: the wrapper
/// recovers it into a 500 response instead of propagating it, so only codec
/// failures ever surface as invocation errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The inbound event is malformed or missing a required field. The
    /// transport contract says this never happens, so there is no fallback.
    #[error("failed to decode API Gateway event: {0}")]
    DecodeEvent(#[source] serde_json::Error),

    /// The response, or a payload handed to [`Response::json`], could not be
    /// serialized.
    ///
    /// [`Response::json`]: crate::Response::json
    #[error("failed to encode API Gateway response: {0}")]
    EncodeResponse(#[source] serde_json::Error),

    /// The request body could not be decoded as the type
    /// [`Request::payload`] was asked for.
    ///
    /// [`Request::payload`]: crate::Request::payload
    #[error("failed to decode request payload: {0}")]
    DecodePayload(#[source] serde_json::Error),
}

use std::fmt::Display;
use std::future::Future;

use futures::future::{self, BoxFuture, FutureExt};
use lambda_runtime::Context;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;

/// Wraps an async `(Request, Context) -> Response` handler into the
/// raw-bytes invocation function the hosting runtime expects.
///
/// Each invocation runs three strictly sequential phases:
///
/// 1. decode the event — a malformed event fails the invocation with
///    [`Error::DecodeEvent`] and no response is synthesized, since a broken
///    event can't be blamed on the handler;
/// 2. await the user handler — a failure here is logged at error severity
///    and replaced with a bare 500 response, so the gateway always receives
///    a well-formed reply and application errors never leak to the caller;
/// 3. encode the response — a failure here propagates as
///    [`Error::EncodeResponse`], there being nothing safer left to send.
///
/// The wrapper holds no state across invocations and implements no timeout
/// of its own; deadlines live in the [`Context`] and are between the
/// transport and the handler.
pub fn handler<H, Fut, E>(
    handler: H,
) -> impl Fn(Vec<u8>, Context) -> BoxFuture<'static, Result<Vec<u8>, Error>>
where
    H: Fn(Request, Context) -> Fut,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
    E: Display,
{
    move |input: Vec<u8>, ctx: Context| {
        let request = match serde_json::from_slice::<Request>(&input) {
            Ok(request) => request,
            Err(err) => return future::err(Error::DecodeEvent(err)).boxed(),
        };
        let invocation = handler(request, ctx);
        async move {
            let response = match invocation.await {
                Ok(response) => response,
                Err(err) => {
                    log::error!("unhandled handler error, responding with HTTP 500: {err}");
                    Response::new(500)
                }
            };
            serde_json::to_vec(&response).map_err(Error::EncodeResponse)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn event() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "httpMethod": "GET",
            "path": "/x",
            "multiValueHeaders": {"Accept": ["*/*"]},
            "requestContext": {
                "apiId": "api",
                "resourcePath": "/x",
                "httpMethod": "GET",
                "requestId": "id",
                "accountId": "acct",
                "stage": "test",
                "identity": {},
                "path": "/test/x"
            },
            "isBase64Encoded": false
        }))
        .unwrap()
    }

    async fn echo_path(request: Request, _: Context) -> Result<Response, String> {
        Response::json(200, None, &json!({"path": request.path})).map_err(|e| e.to_string())
    }

    async fn boom(_: Request, _: Context) -> Result<Response, String> {
        Err("boom".to_string())
    }

    #[tokio::test]
    async fn decodes_invokes_and_encodes() {
        let wrapped = handler(echo_path);
        let output = wrapped(event(), Context::default()).await.unwrap();
        let encoded: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(encoded["statusCode"], 200);
        assert_eq!(encoded["headers"]["Content-Type"], "application/json");
        assert_eq!(encoded["isBase64Encoded"], false);
        let body: Value = serde_json::from_str(encoded["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, json!({"path": "/x"}));
    }

    #[tokio::test]
    async fn handler_failure_becomes_a_bare_500() {
        let wrapped = handler(boom);
        let output = wrapped(event(), Context::default()).await.unwrap();
        assert_eq!(output, br#"{"statusCode":500}"#);
    }

    #[tokio::test]
    async fn malformed_event_fails_the_invocation() {
        let wrapped = handler(echo_path);
        let err = wrapped(b"{}".to_vec(), Context::default()).await.unwrap_err();
        assert!(matches!(err, Error::DecodeEvent(_)));
    }

    #[tokio::test]
    async fn repeated_invocations_encode_identically() {
        let wrapped = handler(echo_path);
        let first = wrapped(event(), Context::default()).await.unwrap();
        let second = wrapped(event(), Context::default()).await.unwrap();
        assert_eq!(first, second);
    }
}

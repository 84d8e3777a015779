use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;
use crate::headers::Headers;
use crate::method::Method;

/// A decoded API Gateway proxy invocation event.
///
/// Required wire keys are `httpMethod`, `path`, `multiValueHeaders`,
/// `requestContext` and `isBase64Encoded`; everything else is optional.
/// Unknown keys are ignored, including the single-value `headers` object,
/// which carries nothing the authoritative `multiValueHeaders` doesn't.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub resource: Option<String>,
    pub path: String,
    pub http_method: Method,
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub multi_value_query_string_parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(rename = "multiValueHeaders")]
    pub headers: Headers,
    pub path_parameters: Option<HashMap<String, String>>,
    pub stage_variables: Option<HashMap<String, String>>,
    pub request_context: RequestContext,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl Request {
    /// Decodes the request body as `P`, treating an absent body as empty.
    ///
    /// Failures belong to whoever called this, typically the user handler;
    /// the invocation wrapper never sees them.
    pub fn payload<P: DeserializeOwned>(&self) -> Result<P, Error> {
        serde_json::from_str(self.body.as_deref().unwrap_or_default()).map_err(Error::DecodePayload)
    }
}

/// The gateway-side context of the invocation.
///
/// `http_method` here is the raw string as the gateway sent it, decoded
/// independently of [`Request::http_method`]; the two are never
/// cross-checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub resource_id: Option<String>,
    pub api_id: String,
    pub resource_path: String,
    pub http_method: String,
    pub request_id: String,
    pub account_id: String,
    pub stage: String,
    pub identity: Identity,
    pub extended_request_id: Option<String>,
    pub path: String,
}

/// Caller identity attributes; every one of them may be absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub cognito_identity_pool_id: Option<String>,
    pub api_key: Option<String>,
    pub user_arn: Option<String>,
    pub cognito_authentication_type: Option<String>,
    pub caller: Option<String>,
    pub user_agent: Option<String>,
    pub user: Option<String>,
    pub cognito_authentication_provider: Option<String>,
    pub source_ip: Option<String>,
    pub account_id: Option<String>,
}

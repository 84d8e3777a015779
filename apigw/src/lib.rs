//! API Gateway proxy-event adapter for AWS Lambda handlers.
//!
//! The gateway invokes a lambda with a JSON event describing an inbound HTTP
//! request. This crate decodes that event into a typed [`Request`], hands it
//! to an async handler together with the invocation [`Context`], and encodes
//! the handler's [`Response`] back into the wire shape the gateway expects.
//!
//! The [`handler`] wrapper defines the failure contract: a malformed event
//! fails the invocation, a failed handler is logged and answered with a bare
//! 500, and the response always reaches the gateway well-formed.

mod error;
mod handler;
mod headers;
mod method;
mod request;
mod response;

pub use error::Error;
pub use handler::handler;
pub use headers::Headers;
pub use method::Method;
pub use request::{Identity, Request, RequestContext};
pub use response::Response;

pub use lambda_runtime::Context;

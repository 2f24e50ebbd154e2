//! Response types for relayed upstream payloads.

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use packetbase_upstream::UpstreamBody;

use crate::error::AppResult;

/// An upstream JSON body relayed byte-for-byte, with the upstream status.
///
/// Construct through [`relay`] so the body has been checked to be JSON.
#[derive(Debug)]
pub struct RelayJson(UpstreamBody);

/// Validate an upstream body as JSON and wrap it for relaying.
pub fn relay(body: UpstreamBody) -> AppResult<RelayJson> {
    Ok(RelayJson(body.ensure_json()?))
}

impl IntoResponse for RelayJson {
    fn into_response(self) -> Response {
        let UpstreamBody { status, bytes } = self.0;
        (status, [(CONTENT_TYPE, "application/json")], bytes).into_response()
    }
}

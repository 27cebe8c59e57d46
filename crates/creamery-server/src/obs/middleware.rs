//! Request counting middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Run the handler, then count the request against its percent-decoded
/// path. Failed requests are counted too.
pub async fn track_endpoint_usage(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let path = decode_path(req.uri().path());
    let method = req.method().clone();

    let resp = next.run(req).await;

    state.metrics().record_request(&path);
    tracing::debug!(%method, %path, status = resp.status().as_u16(), "request served");
    resp
}

/// Percent-decode a request path. `+` is kept literally and malformed
/// escapes pass through unchanged.
pub fn decode_path(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let decoded = bytes
                .get(i + 1..i + 3)
                .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            if let Some(b) = decoded {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

//! Request content type guard.

use salvo::{
    http::header::{CONTENT_TYPE, HeaderValue},
    prelude::*,
};

/// Reject request bodies that are not declared as JSON with `415 Unsupported Media Type`.
#[handler]
pub(crate) async fn require_json(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    if is_json(req.headers().get(CONTENT_TYPE)) {
        return;
    }

    res.render(
        StatusError::unsupported_media_type().brief("Content-Type must be application/json"),
    );

    ctrl.skip_rest();
}

fn is_json(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

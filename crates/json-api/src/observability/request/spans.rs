//! Route labels for spans and metrics.

/// Label shared by every path that no route serves.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the route template that serves it.
///
/// The result is always one of a fixed set of labels, so metric series stay bounded
/// whatever paths clients send.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .collect();

    match segments.as_slice() {
        [""] => "/",
        ["health"] => "/health",
        ["metrics"] => "/metrics",
        ["products"] => "/products",
        ["products", _] => "/products/{id}",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}

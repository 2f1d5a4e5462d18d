//! Service index handler.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Service description returned from `/`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    /// Human readable service name
    pub name: String,

    /// Running version
    pub version: String,

    /// Resource collection root
    pub paths: String,
}

/// Index handler
#[endpoint(tags("health"), summary = "Service index")]
pub(crate) async fn handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        name: "Product Catalog REST API Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        paths: "/products".to_string(),
    })
}

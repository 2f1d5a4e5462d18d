//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use catalog_app::domain::products::records::ProductId;

use crate::{
    extensions::*,
    products::{
        errors::for_product,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Product Update Handler
///
/// Replaces every field of an existing product. The id is taken from the path.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(
        product_id = tracing::field::Empty,
        category = tracing::field::Empty,
        available = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let id = ProductId::from_i64(id.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(id));
    span.record("category", tracing::field::display(request.category));
    span.record("available", request.available);

    let product = state
        .app
        .products
        .update_product(id, request.into())
        .await
        .map_err(for_product(id))?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(product.into()))
}

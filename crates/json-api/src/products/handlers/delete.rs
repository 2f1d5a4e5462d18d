//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::{debug, info};

use catalog_app::domain::products::{ProductsServiceError, records::ProductId};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Delete Product Handler
///
/// Deleting a product that does not exist also succeeds.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ProductId::from_i64(id.into_inner());

    match state.app.products.delete_product(id).await {
        Ok(()) => info!(product_id = %id, "deleted product"),
        Err(ProductsServiceError::NotFound) => {
            debug!(product_id = %id, "product already absent");
        }
        Err(error) => return Err(into_status_error(error)),
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::MockProductsService;

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(4))
            .return_once(|_| Ok(()));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete("http://example.com/products/4")
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(body.is_empty(), "204 must have an empty body");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_204() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/products/0")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_invalid_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product().never();

        let res = TestClient::delete("http://example.com/products/abc")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

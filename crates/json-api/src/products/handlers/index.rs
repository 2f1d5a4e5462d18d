//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::domain::products::filters::{ProductFilter, ProductQuery};

use crate::{extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product matching all of the given filters, oldest first.
/// Parameters other than `name`, `category` and `available` are ignored.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid filter value"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.index",
    skip_all,
    fields(filter = tracing::field::Empty, count = tracing::field::Empty)
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    category: QueryParam<String, false>,
    available: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter::try_from(ProductQuery {
        name: name.into_inner(),
        category: category.into_inner(),
        available: available.into_inner(),
    })
    .or_400()?;

    let span = tracing::Span::current();

    span.record("filter", tracing::field::display(&filter));

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    let products = filter.apply(products);

    span.record("count", products.len());

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, category::Category,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    fn catalog_mock() -> MockProductsService {
        let mut repo = MockProductsService::new();

        let mut apple = make_product(1);
        apple.name = "Apple".to_string();

        let mut hammer = make_product(2);
        hammer.name = "Hammer".to_string();
        hammer.category = Category::Tools;
        hammer.available = false;

        let mut shirt = make_product(3);
        shirt.name = "Shirt".to_string();
        shirt.category = Category::Cloths;
        shirt.available = false;

        repo.expect_list_products()
            .once()
            .return_once(move || Ok(vec![apple, hammer, shirt]));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        repo
    }

    async fn list(url: &str, repo: MockProductsService) -> Result<Vec<i64>, salvo::Error> {
        let response: Vec<ProductResponse> = TestClient::get(url)
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        Ok(response.into_iter().map(|product| product.id).collect())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let response: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(response.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_filters_returns_all_in_order() -> TestResult {
        let ids = list("http://example.com/products", catalog_mock()).await?;

        assert_eq!(ids, vec![1, 2, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_category() -> TestResult {
        let ids = list("http://example.com/products?category=FOOD", catalog_mock()).await?;

        assert_eq!(ids, vec![1]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_availability() -> TestResult {
        let ids = list("http://example.com/products?available=true", catalog_mock()).await?;

        assert_eq!(ids, vec![1]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_name() -> TestResult {
        let ids = list("http://example.com/products?name=Hammer", catalog_mock()).await?;

        assert_eq!(ids, vec![2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_combines_filters() -> TestResult {
        let ids = list(
            "http://example.com/products?category=CLOTHS&available=false",
            catalog_mock(),
        )
        .await?;

        assert_eq!(ids, vec![3]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_ignores_unknown_parameters() -> TestResult {
        let ids = list("http://example.com/products?color=red", catalog_mock()).await?;

        assert_eq!(ids, vec![1, 2, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_category_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();

        let mut res = TestClient::get("http://example.com/products?category=SPACESHIPS")
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.contains("SPACESHIPS"), "body should name the bad value: {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_available_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?available=maybe")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_repository_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::InvalidData));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}

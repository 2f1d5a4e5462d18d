//! JSON error responses.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error body returned for every 4xx and 5xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable reason
    pub message: String,
}

/// Catcher that renders errors as [`ErrorResponse`] regardless of the `Accept` header.
pub(crate) fn json_catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}

#[handler]
async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    let message = match res.replace_body(ResBody::None) {
        ResBody::Error(error) => error.brief,
        _ => status.canonical_reason().unwrap_or("Error").to_string(),
    };

    res.render(Json(ErrorResponse { message }));

    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{router::app_router, test_helpers::state_with_products};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_products(repo)))
                .push(app_router()),
        )
        .catcher(json_catcher())
    }

    #[tokio::test]
    async fn missing_product_message_is_json() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/0")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(body.message.contains("was not found"), "unexpected message: {}", body.message);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_category_message_is_json() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().never();

        let mut res = TestClient::get("http://example.com/products?category=food")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.message.contains("'food'"), "unexpected message: {}", body.message);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_json() -> TestResult {
        let mut res = TestClient::get("http://example.com/nowhere")
            .send(&make_service(MockProductsService::new()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Not Found");

        Ok(())
    }
}

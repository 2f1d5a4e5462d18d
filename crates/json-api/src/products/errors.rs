//! Product Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use catalog_app::domain::products::{ProductsServiceError, records::ProductId};

pub(crate) fn not_found(product: ProductId) -> StatusError {
    StatusError::not_found().brief(format!("Product with id '{product}' was not found."))
}

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::Validation(reason) => {
            warn!("rejected product payload: {reason}");

            StatusError::bad_request().brief(reason.to_string())
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}

/// Like [`into_status_error`], naming `product` in the 404 brief.
pub(crate) fn for_product(product: ProductId) -> impl FnOnce(ProductsServiceError) -> StatusError {
    move |error| match error {
        ProductsServiceError::NotFound => not_found(product),
        error => into_status_error(error),
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use catalog_app::domain::products::data::ProductValidationError;

    use super::*;

    #[test]
    fn not_found_names_the_product() {
        let error = for_product(ProductId::from_i64(42))(ProductsServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Product with id '42' was not found.");
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let error = into_status_error(ProductValidationError::NegativePrice.into());

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "product price must not be negative");
    }

    #[test]
    fn conflicts_map_to_409() {
        let error = into_status_error(ProductsServiceError::AlreadyExists);

        assert_eq!(error.code, StatusCode::CONFLICT);
    }
}

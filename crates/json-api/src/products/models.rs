//! Product Models

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::{
    category::Category, data::NewProduct, records::ProductRecord,
};

/// Product Request
///
/// Body accepted by both create and update. Any `id` in the body is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Decimal price, e.g. "12.50"
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Whether the product can currently be bought
    pub available: bool,

    /// One of UNKNOWN, CLOTHS, FOOD, HOUSEWARES, AUTOMOTIVE, TOOLS
    #[salvo(schema(value_type = String))]
    pub category: Category,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            available: request.available,
            category: request.category,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    /// Product name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Decimal price, serialized as a string
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Whether the product can currently be bought
    pub available: bool,

    /// Category name
    #[salvo(schema(value_type = String))]
    pub category: Category,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::make_product;

    use super::*;

    #[test]
    fn response_serializes_price_as_string() -> TestResult {
        let value = serde_json::to_value(ProductResponse::from(make_product(7)))?;

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["price"], json!("19.99"));
        assert_eq!(value["category"], json!("FOOD"));

        Ok(())
    }

    #[test]
    fn request_defaults_description_and_ignores_id() -> TestResult {
        let request: ProductRequest = serde_json::from_value(json!({
            "id": 99,
            "name": "Apple",
            "price": "1.25",
            "available": true,
            "category": "FOOD",
        }))?;

        let product = NewProduct::from(request);

        assert_eq!(product.description, "");
        assert_eq!(product.price, Decimal::new(125, 2));
        assert_eq!(product.category, Category::Food);

        Ok(())
    }

    #[test]
    fn request_rejects_unknown_category() {
        let result = serde_json::from_value::<ProductRequest>(json!({
            "name": "Apple",
            "price": "1.25",
            "available": true,
            "category": "food",
        }));

        assert!(result.is_err(), "lower-case category must not be coerced");
    }
}

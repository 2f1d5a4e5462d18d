//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::products::category::Category, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Storage-assigned identifier, never reused
    pub id: ProductId,

    /// Non-empty product name
    pub name: String,

    /// Free-text description, possibly empty
    pub description: String,

    /// Non-negative price with at most two decimal places
    pub price: Decimal,

    /// Whether the product can currently be bought
    pub available: bool,

    /// Product category
    pub category: Category,

    /// When the product was created
    pub created_at: Timestamp,

    /// When the product was last written
    pub updated_at: Timestamp,
}

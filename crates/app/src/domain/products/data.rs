//! Products Data

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::products::category::Category;

/// Longest name the `name` column accepts, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Longest description the `description` column accepts, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 250;

/// Fractional digits kept by the `NUMERIC(14, 2)` price column.
pub const PRICE_SCALE: u32 = 2;

/// Reasons a product payload is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    /// Name is empty or whitespace only.
    #[error("product name must not be empty")]
    EmptyName,

    /// Name exceeds [`NAME_MAX_LEN`].
    #[error("product name must be at most {NAME_MAX_LEN} characters")]
    NameTooLong,

    /// Description exceeds [`DESCRIPTION_MAX_LEN`].
    #[error("product description must be at most {DESCRIPTION_MAX_LEN} characters")]
    DescriptionTooLong,

    /// Name or description contains `\0`, which text columns cannot store.
    #[error("product text must not contain NUL characters")]
    NulCharacter,

    /// Price is below zero.
    #[error("product price must not be negative")]
    NegativePrice,

    /// Price has more than [`PRICE_SCALE`] decimal places.
    #[error("product price must have at most {PRICE_SCALE} decimal places")]
    PricePrecision,

    /// Price does not fit the column.
    #[error("product price is out of range")]
    PriceOutOfRange,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name
    pub name: String,
    /// Description, empty when omitted
    pub description: String,
    /// Exact decimal price
    pub price: Decimal,
    /// Availability flag
    pub available: bool,
    /// Product category
    pub category: Category,
}

/// Product Update Data
pub type ProductUpdate = NewProduct;

impl NewProduct {
    /// Check the payload against the column constraints.
    ///
    /// Prices are never rounded: a value the column cannot store exactly is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first constraint the payload violates.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }

        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(ProductValidationError::NameTooLong);
        }

        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ProductValidationError::DescriptionTooLong);
        }

        if self.name.contains('\0') || self.description.contains('\0') {
            return Err(ProductValidationError::NulCharacter);
        }

        if self.price < Decimal::ZERO {
            return Err(ProductValidationError::NegativePrice);
        }

        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(ProductValidationError::PricePrecision);
        }

        if self.price > max_price() {
            return Err(ProductValidationError::PriceOutOfRange);
        }

        Ok(())
    }
}

/// Largest price the `NUMERIC(14, 2)` price column can hold.
fn max_price() -> Decimal {
    Decimal::new(99_999_999_999_999, PRICE_SCALE)
}

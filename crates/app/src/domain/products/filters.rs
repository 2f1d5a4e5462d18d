//! Product Filters
//!
//! Listing queries resolve into a [`ProductFilter`]: one [`ProductPredicate`] per
//! recognised parameter, combined with logical AND. An empty filter selects every
//! product.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::products::{
    category::{Category, CategoryParseError},
    records::ProductRecord,
};

/// Raw listing query parameters, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Exact product name.
    pub name: Option<String>,

    /// Upper-case category name.
    pub category: Option<String>,

    /// `true` or `false`, in any case.
    pub available: Option<String>,
}

/// Raised when a recognised parameter carries a value that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid category filter: {0}")]
    /// The category value names no [`Category`].
    InvalidCategory(#[from] CategoryParseError),

    #[error("invalid available filter: '{0}' is not 'true' or 'false'")]
    /// The availability value is neither `true` nor `false`.
    InvalidAvailability(String),
}

/// A boolean test over a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductPredicate {
    /// Exact, case-sensitive name match.
    Name(String),

    /// Category membership.
    Category(Category),

    /// Availability match.
    Available(bool),
}

impl ProductPredicate {
    /// Whether `product` passes this predicate.
    #[must_use]
    pub fn matches(&self, product: &ProductRecord) -> bool {
        match self {
            Self::Name(name) => product.name == *name,
            Self::Category(category) => product.category == *category,
            Self::Available(available) => product.available == *available,
        }
    }
}

impl Display for ProductPredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Name(name) => write!(f, "name={name}"),
            Self::Category(category) => write!(f, "category={category}"),
            Self::Available(available) => write!(f, "available={available}"),
        }
    }
}

/// Conjunction of product predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    predicates: SmallVec<[ProductPredicate; 3]>,
}

impl ProductFilter {
    /// Filter that selects every product.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a predicate to the conjunction.
    #[must_use]
    pub fn with(mut self, predicate: ProductPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Predicates in the order they were added.
    #[must_use]
    pub fn predicates(&self) -> &[ProductPredicate] {
        &self.predicates
    }

    /// True when the filter selects every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Whether the product satisfies every predicate.
    #[must_use]
    pub fn matches(&self, product: &ProductRecord) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(product))
    }

    /// Keep the matching products, in their original order.
    #[must_use]
    pub fn apply(&self, products: Vec<ProductRecord>) -> Vec<ProductRecord> {
        if self.is_empty() {
            return products;
        }

        products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

impl Display for ProductFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_empty() {
            return f.write_str("*");
        }

        for (index, predicate) in self.predicates.iter().enumerate() {
            if index > 0 {
                f.write_str(" AND ")?;
            }

            write!(f, "{predicate}")?;
        }

        Ok(())
    }
}

impl TryFrom<ProductQuery> for ProductFilter {
    type Error = FilterError;

    fn try_from(query: ProductQuery) -> Result<Self, Self::Error> {
        let mut filter = Self::all();

        if let Some(name) = query.name {
            filter = filter.with(ProductPredicate::Name(name));
        }

        if let Some(category) = query.category {
            filter = filter.with(ProductPredicate::Category(category.parse()?));
        }

        if let Some(available) = query.available {
            filter = filter.with(ProductPredicate::Available(parse_available(&available)?));
        }

        Ok(filter)
    }
}

fn parse_available(value: &str) -> Result<bool, FilterError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FilterError::InvalidAvailability(value.to_string()))
    }
}

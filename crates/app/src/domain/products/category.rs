//! Product Categories

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of labels classifying a product.
///
/// The upper-case name is both the wire and the storage representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Not yet classified
    Unknown,
    /// Clothing
    Cloths,
    /// Food and drink
    Food,
    /// Household goods
    Housewares,
    /// Vehicle parts and accessories
    Automotive,
    /// Hand and power tools
    Tools,
}

/// Raised when text does not name a [`Category`] member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid category")]
pub struct CategoryParseError(pub String);

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Unknown,
        Self::Cloths,
        Self::Food,
        Self::Housewares,
        Self::Automotive,
        Self::Tools,
    ];

    /// Upper-case wire and storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Cloths => "CLOTHS",
            Self::Food => "FOOD",
            Self::Housewares => "HOUSEWARES",
            Self::Automotive => "AUTOMOTIVE",
            Self::Tools => "TOOLS",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_every_member_from_its_name() -> TestResult {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>()?, category);
        }

        Ok(())
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(
            "food".parse::<Category>(),
            Err(CategoryParseError("food".to_string()))
        );
    }

    #[test]
    fn unknown_text_is_rejected_not_coerced() {
        assert!("GADGETS".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_upper_case_name() -> TestResult {
        assert_eq!(serde_json::to_string(&Category::Housewares)?, "\"HOUSEWARES\"");
        assert_eq!(serde_json::from_str::<Category>("\"TOOLS\"")?, Category::Tools);
        assert!(serde_json::from_str::<Category>("\"tools\"").is_err());

        Ok(())
    }
}

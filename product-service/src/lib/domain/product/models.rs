use std::fmt;

use crate::product::errors::PaginationError;
use crate::product::errors::PriceError;
use crate::product::errors::ProductNameError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: Option<String>,
    pub price: Price,
    pub category: Option<String>,
}

/// Product unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name value type: non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 200 characters
    pub fn new(name: String) -> Result<Self, ProductNameError> {
        if name.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unit price. Finite and never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// # Errors
    /// * `NotFinite` - NaN or infinite
    /// * `Negative` - Below zero
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if value < 0.0 {
            return Err(PriceError::Negative(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Every caller-supplied field of a product.
///
/// Used both for creation and for full replacement: fields left out of an update
/// are cleared, not preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: ProductName,
    pub description: Option<String>,
    pub price: Price,
    pub category: Option<String>,
}

/// 1-based page window over the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u32,
    per_page: u32,
}

impl Page {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 20;
    pub const MAX_PER_PAGE: u32 = 100;

    /// # Errors
    /// * `PageOutOfRange` - `page` is 0
    /// * `PerPageOutOfRange` - `per_page` outside 1..=100
    pub fn new(page: u32, per_page: u32) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::PageOutOfRange(page));
        }
        if !(1..=Self::MAX_PER_PAGE).contains(&per_page) {
            return Err(PaginationError::PerPageOutOfRange {
                min: 1,
                max: Self::MAX_PER_PAGE,
                actual: per_page,
            });
        }
        Ok(Self { page, per_page })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// Listing query: a page window plus an optional exact category match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: Page,
    pub category: Option<String>,
}

impl ProductQuery {
    /// An empty category means no filter.
    pub fn new(page: Page, category: Option<String>) -> Self {
        Self {
            page,
            category: category.filter(|c| !c.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_valid() {
        assert!(ProductName::new("Widget".to_string()).is_ok());
        assert!(ProductName::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn test_product_name_empty() {
        assert_eq!(
            ProductName::new(String::new()),
            Err(ProductNameError::Empty)
        );
        assert_eq!(
            ProductName::new("   ".to_string()),
            Err(ProductNameError::Empty)
        );
    }

    #[test]
    fn test_product_name_too_long() {
        assert_eq!(
            ProductName::new("x".repeat(201)),
            Err(ProductNameError::TooLong {
                max: 200,
                actual: 201
            })
        );
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(Price::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Price::new(9.99).unwrap().value(), 9.99);
        assert_eq!(Price::new(-0.01), Err(PriceError::Negative(-0.01)));
        assert_eq!(Price::new(f64::NAN), Err(PriceError::NotFinite));
        assert_eq!(Price::new(f64::INFINITY), Err(PriceError::NotFinite));
    }

    #[test]
    fn test_page_window() {
        let first = Page::default();
        assert_eq!((first.offset(), first.limit()), (0, 20));

        let third = Page::new(3, 10).unwrap();
        assert_eq!((third.offset(), third.limit()), (20, 10));
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(Page::new(0, 20), Err(PaginationError::PageOutOfRange(0)));
        assert!(matches!(
            Page::new(1, 0),
            Err(PaginationError::PerPageOutOfRange { actual: 0, .. })
        ));
        assert!(matches!(
            Page::new(1, 101),
            Err(PaginationError::PerPageOutOfRange { actual: 101, .. })
        ));
        assert!(Page::new(1, 100).is_ok());
    }

    #[test]
    fn test_empty_category_is_no_filter() {
        let query = ProductQuery::new(Page::default(), Some(String::new()));
        assert_eq!(query.category, None);
    }
}

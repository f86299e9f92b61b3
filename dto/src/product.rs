use crate::dates::parse_expiry_date;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A purchasable membership tier or pass.
/// The expiry is kept as the payment backend sends it (`dd-MM-yyyy`);
/// [Product::expiry_date] is the only sanctioned way to interpret it.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Product {
    description: String,
    expires: Option<String>,
}

impl Product {
    pub fn new(description: String, expires: Option<String>) -> Self {
        Self {
            description,
            expires,
        }
    }

    /// An absent or malformed expiry yields `None`.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expires.as_deref().and_then(parse_expiry_date)
    }
}

/// One entry of a member's product history.
/// The backend may send an assignment whose product has been deleted.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct ProductAssignment {
    products: Option<Product>,
}

impl ProductAssignment {
    pub fn new(products: Option<Product>) -> Self {
        Self { products }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Product {
        pub fn new_test(expires: &str) -> Self {
            Product {
                description: "Full Membership".to_owned(),
                expires: Some(expires.to_owned()),
            }
        }
    }

    #[test]
    fn should_parse_expiry_date() {
        let product = Product::new_test("30-09-2025");
        assert_eq!(
            chrono::NaiveDate::from_ymd_opt(2025, 9, 30),
            product.expiry_date()
        );
    }

    #[test]
    fn should_not_parse_absent_expiry() {
        let product = Product::new("Full Membership".to_owned(), None);
        assert_eq!(None, product.expiry_date());
    }

    #[test]
    fn should_not_parse_malformed_expiry() {
        let product = Product::new_test("2025/09/30");
        assert_eq!(None, product.expiry_date());
    }
}

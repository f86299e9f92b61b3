use crate::product::{Product, ProductAssignment};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A person with a membership record tracked by the governing body.
/// The product history is ordered by assignment: the backend appends each
/// purchase, so the last entry is the most recent one.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Member {
    uuid: String,
    first_name: String,
    last_name: String,
    email: String,
    position: Option<String>,
    is_student: bool,
    university: Option<String>,
    stripe_products: Vec<ProductAssignment>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: String,
        first_name: String,
        last_name: String,
        email: String,
        position: Option<String>,
        is_student: bool,
        university: Option<String>,
        stripe_products: Vec<ProductAssignment>,
    ) -> Self {
        Self {
            uuid,
            first_name,
            last_name,
            email,
            position,
            is_student,
            university,
            stripe_products,
        }
    }

    /// The most recently assigned product, i.e. the last entry of the product
    /// history. There is no sort by expiry date. `None` when the member has
    /// never been assigned a product, or when the last assignment lost its
    /// product on the backend side.
    pub fn latest_product(&self) -> Option<&Product> {
        self.stripe_products
            .last()
            .and_then(|assignment| assignment.products().as_ref())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const ACTIVE_EXPIRY: &str = "31-12-2999";
    pub const EXPIRED_EXPIRY: &str = "01-01-2000";

    impl Member {
        pub fn new_test(first_name: &str, last_name: &str, expires: Option<&str>) -> Self {
            let stripe_products = expires
                .map(|expires| vec![ProductAssignment::new(Some(Product::new_test(expires)))])
                .unwrap_or_default();
            Member {
                uuid: format!("{first_name}-{last_name}").to_lowercase(),
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                email: format!("{first_name}.{last_name}@club.test").to_lowercase(),
                position: None,
                is_student: false,
                university: None,
                stripe_products,
            }
        }
    }

    pub fn active_member() -> Member {
        Member::new_test("Jane", "Keeper", Some(ACTIVE_EXPIRY))
    }

    pub fn expired_member() -> Member {
        Member::new_test("Jon", "Seeker", Some(EXPIRED_EXPIRY))
    }

    pub fn productless_member() -> Member {
        Member::new_test("Robin", "Chaser", None)
    }

    #[test]
    fn latest_product_should_be_last_assignment() {
        let mut member = Member::new_test("Jane", "Keeper", Some(EXPIRED_EXPIRY));
        member
            .stripe_products
            .push(ProductAssignment::new(Some(Product::new_test(
                ACTIVE_EXPIRY,
            ))));

        let latest = member.latest_product().unwrap();
        assert_eq!(&Some(ACTIVE_EXPIRY.to_owned()), latest.expires());
    }

    #[test]
    fn latest_product_should_be_none_when_history_is_empty() {
        assert_eq!(None, productless_member().latest_product());
    }

    #[test]
    fn latest_product_should_be_none_when_last_assignment_has_no_product() {
        let mut member = active_member();
        member.stripe_products.push(ProductAssignment::new(None));

        assert_eq!(None, member.latest_product());
    }

    #[test]
    fn should_format_full_name() {
        assert_eq!("Jane Keeper", active_member().full_name());
    }
}

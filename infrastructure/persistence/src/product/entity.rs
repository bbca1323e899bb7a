use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::Category;

pub const PRODUCT_COLUMNS: &str = "id, name, description, price, available, category";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.available,
            self.category.parse::<Category>().unwrap_or_else(|_| {
                tracing::warn!(id = self.id, category = %self.category, "unknown category in row");
                Category::Unknown
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(category: &str) -> ProductEntity {
        ProductEntity {
            id: 11,
            name: "Wrench".to_string(),
            description: "Adjustable wrench".to_string(),
            price: BigDecimal::from_str("14.25").unwrap(),
            available: true,
            category: category.to_string(),
        }
    }

    #[test]
    fn should_map_row_to_persisted_product() {
        let product = entity("TOOLS").into_domain();

        assert_eq!(product.id, Some(11));
        assert_eq!(product.name, "Wrench");
        assert_eq!(product.description, "Adjustable wrench");
        assert_eq!(product.price, BigDecimal::from_str("14.25").unwrap());
        assert!(product.available);
        assert_eq!(product.category, Category::Tools);
    }

    #[test]
    fn should_degrade_unknown_category_to_unknown() {
        assert_eq!(entity("GADGETS").into_domain().category, Category::Unknown);
    }
}

//! Shared fixtures for unit tests: mocks of the domain ports, an in-memory
//! store and a random product factory.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;
use rand::Rng;
use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::Category;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &Product) -> Result<i64, RepositoryError>;
        async fn update(&self, id: i64, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        async fn find(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
        async fn all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Store fake keeping rows in a map; ids are assigned sequentially from 1.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<BTreeMap<i64, Product>>,
    next_id: Mutex<i64>,
}

impl InMemoryProductRepository {
    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<i64, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;
        let mut stored = product.clone();
        stored.id = Some(id);
        self.rows.lock().unwrap().insert(id, stored);
        Ok(id)
    }

    async fn update(&self, id: i64, product: &Product) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        *row = product.clone();
        row.id = Some(id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|_| true))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| p.name == name))
    }

    async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| p.available == available))
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| p.category == category))
    }

    async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.filter(|p| &p.price == price))
    }
}

const NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

const DESCRIPTIONS: [&str; 4] = [
    "Everyday essential",
    "Limited edition",
    "Imported from abroad",
    "Locally sourced",
];

/// Random, unpersisted product.
pub fn random_product() -> Product {
    let mut rng = rand::rng();
    let categories: Vec<Category> = Category::iter().collect();
    Product {
        id: None,
        name: NAMES.choose(&mut rng).unwrap().to_string(),
        description: DESCRIPTIONS.choose(&mut rng).unwrap().to_string(),
        price: BigDecimal::new(rng.random_range(50i64..=200_000).into(), 2),
        available: rng.random_bool(0.5),
        category: *categories.choose(&mut rng).unwrap(),
    }
}

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Category;

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::error_mapper::map_sqlx_error;

/// [`ProductRepository`] over the `products` table.
///
/// Holds a pool handle; each statement checks a connection out and returns
/// it when done.
#[derive(Clone)]
pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Removes every row; returns how many were deleted.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_all", e))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &Product) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.category.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        tracing::debug!(id, name = %product.name, "product inserted");
        Ok(id)
    }

    async fn update(&self, id: i64, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                available = $5,
                category = $6
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.category.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {} FROM products ORDER BY id", PRODUCT_COLUMNS);
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM products WHERE name = $1 ORDER BY id",
            PRODUCT_COLUMNS
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_name", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM products WHERE available = $1 ORDER BY id",
            PRODUCT_COLUMNS
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(available)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_availability", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM products WHERE category = $1 ORDER BY id",
            PRODUCT_COLUMNS
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_category", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM products WHERE price = $1 ORDER BY id",
            PRODUCT_COLUMNS
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(price)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_price", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

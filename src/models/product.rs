//! Product rows and the queries that read and write them.
//!
//! Every function issues exactly one statement against the pool and never
//! retries. `price` is `NUMERIC(10,2)` in the store and is cast to `FLOAT8` on
//! the way out.

use sqlx::{FromRow, PgPool};

use crate::error::AppError;

const COLUMNS: &str = "id, name, price::FLOAT8 AS price";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub async fn fetch_by_id(pool: &PgPool, id: i32) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// A `None` price falls back to the column default of 0.00.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        price: Option<f64>,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price) VALUES ($1, COALESCE($2, 0)) RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(price)
        .fetch_one(pool)
        .await?;

        Ok(product)
    }

    /// Returns the stored row, or `None` when `id` does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        name: &str,
        price: f64,
    ) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET name = $1, price = $2 WHERE id = $3 RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(price)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(product)
    }

    /// Returns the number of rows removed; zero when `id` does not exist.
    pub async fn delete_by_id(pool: &PgPool, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// No ORDER BY: row order is whatever the store returns and may differ
    /// between calls with the same window.
    pub async fn list_range(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(products)
    }

    pub async fn list_under(pool: &PgPool, threshold: i64) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE price < $1"
        ))
        .bind(threshold)
        .fetch_all(pool)
        .await?;

        Ok(products)
    }

    pub async fn list_over(pool: &PgPool, threshold: i64) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE price > $1"
        ))
        .bind(threshold)
        .fetch_all(pool)
        .await?;

        Ok(products)
    }

    pub async fn find_min(pool: &PgPool) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY price ASC LIMIT 1"
        ))
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    pub async fn find_max(pool: &PgPool) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY price DESC LIMIT 1"
        ))
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Case-sensitive `LIKE` match. `%` and `_` in `fragment` are not escaped
    /// and act as wildcards.
    pub async fn list_by_name_substring(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE name LIKE '%' || $1 || '%'"
        ))
        .bind(fragment)
        .fetch_all(pool)
        .await?;

        Ok(products)
    }
}

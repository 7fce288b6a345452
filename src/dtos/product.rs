// src/dtos/product.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub count: Option<i64>,
    #[serde(alias = "offset")]
    pub start: Option<i64>,
}

impl ListProductsQuery {
    /// `(offset, limit)` with the count clamped to `1..=10` and a non-negative start.
    pub fn window(&self) -> (i64, i64) {
        let count = match self.count {
            Some(c) if (1..=DEFAULT_COUNT).contains(&c) => c,
            _ => DEFAULT_COUNT,
        };
        let start = self.start.unwrap_or(0).max(0);
        (start, count)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

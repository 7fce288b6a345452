// src/handlers/product.rs
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, instrument};

use crate::dtos::product::{
    CreateProductRequest, DeleteResponse, ListProductsQuery, ProductResponse, UpdateProductRequest,
};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::product::Product;
use crate::state::AppState;

fn to_response(products: Vec<Product>) -> Json<Vec<ProductResponse>> {
    Json(products.into_iter().map(ProductResponse::from).collect())
}

// GET /products?count=&start=
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let (offset, limit) = query.window();
    let products = Product::list_range(&state.db_pool, offset, limit).await?;
    Ok(to_response(products))
}

// GET /product/{id}
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = Product::fetch_by_id(&state.db_pool, id).await?;
    Ok(Json(ProductResponse::from(product)))
}

// POST /product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = Product::create(&state.db_pool, &payload.name, payload.price).await?;
    debug!(id = product.id, "Created product");
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PUT /product/{id}
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let stored = Product::update(&state.db_pool, id, &payload.name, payload.price).await?;
    let product = match stored {
        Some(product) => ProductResponse::from(product),
        None => {
            debug!(id, "Update matched no rows");
            ProductResponse { id, name: payload.name, price: payload.price }
        }
    };

    Ok(Json(product))
}

// DELETE /product/{id}
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = Product::delete_by_id(&state.db_pool, id).await?;
    if deleted == 0 {
        debug!(id, "Delete matched no rows");
    }

    Ok(Json(DeleteResponse { result: "success" }))
}

// GET /productsUnder/{value}
#[instrument(skip(state))]
pub async fn get_products_under(
    State(state): State<AppState>,
    AppPath(value): AppPath<i64>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = Product::list_under(&state.db_pool, value).await?;
    Ok(to_response(products))
}

// GET /productsOver/{value}
#[instrument(skip(state))]
pub async fn get_products_over(
    State(state): State<AppState>,
    AppPath(value): AppPath<i64>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = Product::list_over(&state.db_pool, value).await?;
    Ok(to_response(products))
}

// GET /products/min
#[instrument(skip(state))]
pub async fn get_min_product(
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = Product::find_min(&state.db_pool).await?;
    Ok(Json(ProductResponse::from(product)))
}

// GET /products/max
#[instrument(skip(state))]
pub async fn get_max_product(
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = Product::find_max(&state.db_pool).await?;
    Ok(Json(ProductResponse::from(product)))
}

// GET /products/name/{fragment}
#[instrument(skip(state))]
pub async fn get_products_by_name(
    State(state): State<AppState>,
    AppPath(fragment): AppPath<String>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = Product::list_by_name_substring(&state.db_pool, &fragment).await?;
    Ok(to_response(products))
}

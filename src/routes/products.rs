use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::product::{
    create_product, delete_product, get_max_product, get_min_product, get_product, get_products,
    get_products_by_name, get_products_over, get_products_under, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products))
        .route("/product", post(create_product))
        .route("/product/{id}", get(get_product).put(update_product).delete(delete_product))
        .route("/productsUnder/{value}", get(get_products_under))
        .route("/productsOver/{value}", get(get_products_over))
        .route("/products/min", get(get_min_product))
        .route("/products/max", get(get_max_product))
        .route("/products/name/{fragment}", get(get_products_by_name))
}

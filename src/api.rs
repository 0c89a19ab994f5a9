use gloo_net::http::Request;
use thiserror::Error;

use crate::models::product::Product;

const STORE_API: &str = "https://fakestoreapi.com/products";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Looks up one product by id. A missing product surfaces as an error either
/// through the status code or through an undecodable body; the caller treats
/// both the same as "not found".
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    let response = Request::get(&format!("{STORE_API}/{id}")).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<Product>().await?)
}

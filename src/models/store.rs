use crate::entities::product_entity as products;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl From<products::Model> for ProductResponse {
    fn from(product: products::Model) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price_cents: product.price_cents,
            category: product.category,
            image_url: product.image_url,
            in_stock: product.in_stock,
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: String,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
    #[schema(example = 1)]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartLineItem {
    pub product_id: i64,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub subtotal_cents: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub total_cents: i64,
}

/// Line subtotals and the cart total are always derived server-side.
pub fn cart_total_cents(items: &[CartLineItem]) -> i64 {
    items.iter().map(|item| item.subtotal_cents).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i64, price_cents: i64, quantity: i32) -> CartLineItem {
        CartLineItem {
            product_id,
            name: format!("produto {product_id}"),
            price_cents,
            quantity,
            subtotal_cents: price_cents * quantity as i64,
        }
    }

    #[test]
    fn test_cart_total_sums_line_subtotals() {
        // 2 x R$12,50 + 1 x R$45,90 = R$70,90
        let items = vec![line(1, 1250, 2), line(2, 4590, 1)];
        assert_eq!(cart_total_cents(&items), 7090);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(cart_total_cents(&[]), 0);
    }
}

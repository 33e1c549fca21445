use crate::database::DbPool;
use crate::entities::{cart_item_entity as cart_items, product_entity as products};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::UserService;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct StoreService {
    pool: DbPool,
    user_service: UserService,
}

impl StoreService {
    pub fn new(pool: DbPool, user_service: UserService) -> Self {
        Self { pool, user_service }
    }

    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> AppResult<PaginatedResponse<ProductResponse>> {
        let params = PaginationParams {
            page: query.page,
            page_size: query.page_size,
        };

        let mut finder = products::Entity::find().filter(products::Column::IsActive.eq(true));
        if let Some(category) = &query.category {
            finder = finder.filter(products::Column::Category.eq(category.clone()));
        }

        let total = finder.clone().count(&self.pool).await? as i64;
        let models = finder
            .order_by_asc(products::Column::Name)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;
        let items: Vec<ProductResponse> = models.into_iter().map(ProductResponse::from).collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// Out-of-stock products never enter a cart; the client disables the
    /// button, the server enforces it.
    pub async fn add_to_cart(
        &self,
        user_id: i64,
        request: AddToCartRequest,
    ) -> AppResult<CartResponse> {
        if request.quantity < 1 {
            return Err(AppError::ValidationError(
                "Quantidade deve ser pelo menos 1".to_string(),
            ));
        }

        let product = products::Entity::find_by_id(request.product_id)
            .filter(products::Column::IsActive.eq(true))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))?;
        if !product.in_stock {
            return Err(AppError::ValidationError(
                "Produto fora de estoque".to_string(),
            ));
        }

        let existing = cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id))
            .filter(cart_items::Column::ProductId.eq(request.product_id))
            .one(&self.pool)
            .await?;

        match existing {
            Some(row) => {
                let next = row.quantity + request.quantity;
                let mut active = row.into_active_model();
                active.quantity = Set(next);
                active.updated_at = Set(Utc::now());
                active.update(&self.pool).await?;
            }
            None => {
                cart_items::ActiveModel {
                    user_id: Set(user_id),
                    product_id: Set(request.product_id),
                    quantity: Set(request.quantity),
                    ..Default::default()
                }
                .insert(&self.pool)
                .await?;
            }
        }

        self.get_cart(user_id).await
    }

    pub async fn get_cart(&self, user_id: i64) -> AppResult<CartResponse> {
        let items = cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id))
            .order_by_asc(cart_items::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        let product_ids: Vec<i64> = items.iter().map(|i| i.product_id).collect();
        let product_map: HashMap<i64, products::Model> = products::Entity::find()
            .filter(products::Column::Id.is_in(product_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let lines: Vec<CartLineItem> = items
            .into_iter()
            .filter_map(|item| {
                product_map.get(&item.product_id).map(|product| CartLineItem {
                    product_id: product.id,
                    name: product.name.clone(),
                    price_cents: product.price_cents,
                    quantity: item.quantity,
                    subtotal_cents: product.price_cents * item.quantity as i64,
                })
            })
            .collect();

        let total_cents = cart_total_cents(&lines);
        Ok(CartResponse {
            items: lines,
            total_cents,
        })
    }

    pub async fn update_cart_item(
        &self,
        user_id: i64,
        product_id: i64,
        request: UpdateCartItemRequest,
    ) -> AppResult<CartResponse> {
        if request.quantity < 1 {
            return Err(AppError::ValidationError(
                "Quantidade deve ser pelo menos 1".to_string(),
            ));
        }

        let item = cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id))
            .filter(cart_items::Column::ProductId.eq(product_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Item não está no carrinho".to_string()))?;

        let mut active = item.into_active_model();
        active.quantity = Set(request.quantity);
        active.updated_at = Set(Utc::now());
        active.update(&self.pool).await?;

        self.get_cart(user_id).await
    }

    pub async fn remove_cart_item(&self, user_id: i64, product_id: i64) -> AppResult<CartResponse> {
        let item = cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id))
            .filter(cart_items::Column::ProductId.eq(product_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Item não está no carrinho".to_string()))?;

        item.delete(&self.pool).await?;
        self.get_cart(user_id).await
    }

    pub async fn create_product(
        &self,
        admin_id: i64,
        request: CreateProductRequest,
    ) -> AppResult<ProductResponse> {
        self.user_service.ensure_admin(admin_id).await?;
        if request.price_cents < 0 {
            return Err(AppError::ValidationError("Preço inválido".to_string()));
        }

        let product = products::ActiveModel {
            name: Set(request.name),
            description: Set(request.description),
            price_cents: Set(request.price_cents),
            category: Set(request.category),
            image_url: Set(request.image_url),
            in_stock: Set(request.in_stock.unwrap_or(true)),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(ProductResponse::from(product))
    }

    pub async fn update_product(
        &self,
        admin_id: i64,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        self.user_service.ensure_admin(admin_id).await?;

        let product = products::Entity::find_by_id(product_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))?;

        let mut active = product.into_active_model();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(description) = request.description {
            active.description = Set(description);
        }
        if let Some(price_cents) = request.price_cents {
            if price_cents < 0 {
                return Err(AppError::ValidationError("Preço inválido".to_string()));
            }
            active.price_cents = Set(price_cents);
        }
        if let Some(category) = request.category {
            active.category = Set(category);
        }
        if let Some(image_url) = request.image_url {
            active.image_url = Set(Some(image_url));
        }
        if let Some(in_stock) = request.in_stock {
            active.in_stock = Set(in_stock);
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.pool).await?;
        Ok(ProductResponse::from(updated))
    }
}

use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::StoreService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/store/products",
    tag = "store",
    params(
        ("category" = Option<String>, Query, description = "Filtra por categoria"),
        ("page" = Option<i64>, Query, description = "Página"),
        ("page_size" = Option<i64>, Query, description = "Itens por página")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Catálogo de produtos ativos")
    )
)]
pub async fn list_products(
    store_service: web::Data<StoreService>,
    query: web::Query<ProductQuery>,
) -> Result<HttpResponse> {
    match store_service.list_products(&query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/store/cart",
    tag = "store",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Carrinho com total em centavos", body = CartResponse)
    )
)]
pub async fn get_cart(
    store_service: web::Data<StoreService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match store_service.get_cart(user_id).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cart
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/store/cart",
    tag = "store",
    request_body = AddToCartRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Item adicionado ao carrinho", body = CartResponse),
        (status = 400, description = "Produto fora de estoque ou quantidade inválida")
    )
)]
pub async fn add_to_cart(
    store_service: web::Data<StoreService>,
    req: HttpRequest,
    request: web::Json<AddToCartRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match store_service.add_to_cart(user_id, request.into_inner()).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cart
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/store/cart/{product_id}",
    tag = "store",
    params(
        ("product_id" = i64, Path, description = "Id do produto")
    ),
    request_body = UpdateCartItemRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Quantidade atualizada", body = CartResponse),
        (status = 404, description = "Item não está no carrinho")
    )
)]
pub async fn update_cart_item(
    store_service: web::Data<StoreService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateCartItemRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let product_id = path.into_inner();

    match store_service
        .update_cart_item(user_id, product_id, request.into_inner())
        .await
    {
        Ok(cart) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cart
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/store/cart/{product_id}",
    tag = "store",
    params(
        ("product_id" = i64, Path, description = "Id do produto")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Item removido do carrinho", body = CartResponse),
        (status = 404, description = "Item não está no carrinho")
    )
)]
pub async fn remove_cart_item(
    store_service: web::Data<StoreService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let product_id = path.into_inner();

    match store_service.remove_cart_item(user_id, product_id).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": cart
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn store_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/store")
            .route("/products", web::get().to(list_products))
            .route("/cart", web::get().to(get_cart))
            .route("/cart", web::post().to(add_to_cart))
            .route("/cart/{product_id}", web::put().to(update_cart_item))
            .route("/cart/{product_id}", web::delete().to(remove_cart_item)),
    );
}

use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::{LearningService, StoreService, UserService};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    params(
        ("page" = Option<i64>, Query, description = "Página"),
        ("page_size" = Option<i64>, Query, description = "Itens por página")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lista paginada de usuários"),
        (status = 403, description = "Requer perfil de administrador")
    )
)]
pub async fn list_users(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let admin_id = current_user_id(&req);

    match user_service.list_users(admin_id, &query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/products",
    tag = "admin",
    request_body = CreateProductRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Produto criado", body = ProductResponse),
        (status = 403, description = "Requer perfil de administrador")
    )
)]
pub async fn create_product(
    store_service: web::Data<StoreService>,
    req: HttpRequest,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse> {
    let admin_id = current_user_id(&req);

    match store_service
        .create_product(admin_id, request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/products/{id}",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "Id do produto")
    ),
    request_body = UpdateProductRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Produto atualizado", body = ProductResponse),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    store_service: web::Data<StoreService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse> {
    let admin_id = current_user_id(&req);
    let product_id = path.into_inner();

    match store_service
        .update_product(admin_id, product_id, request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": product
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/tracks",
    tag = "admin",
    request_body = CreateTrackRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Trilha criada", body = TrackSummary),
        (status = 403, description = "Requer perfil de administrador")
    )
)]
pub async fn create_track(
    learning_service: web::Data<LearningService>,
    req: HttpRequest,
    request: web::Json<CreateTrackRequest>,
) -> Result<HttpResponse> {
    let admin_id = current_user_id(&req);

    match learning_service
        .create_track(admin_id, request.into_inner())
        .await
    {
        Ok(track) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": track
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/tracks/{id}/videos",
    tag = "admin",
    params(
        ("id" = i64, Path, description = "Id da trilha")
    ),
    request_body = CreateVideoRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Vídeo adicionado à trilha", body = VideoWithProgress),
        (status = 404, description = "Trilha não encontrada")
    )
)]
pub async fn create_video(
    learning_service: web::Data<LearningService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<CreateVideoRequest>,
) -> Result<HttpResponse> {
    let admin_id = current_user_id(&req);
    let track_id = path.into_inner();

    match learning_service
        .create_video(admin_id, track_id, request.into_inner())
        .await
    {
        Ok(video) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": video
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/users", web::get().to(list_users))
            .route("/products", web::post().to(create_product))
            .route("/products/{id}", web::put().to(update_product))
            .route("/tracks", web::post().to(create_track))
            .route("/tracks/{id}/videos", web::post().to(create_video)),
    );
}

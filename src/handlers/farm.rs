use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::FarmService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/farms",
    tag = "farms",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fazendas do usuário", body = [FarmResponse])
    )
)]
pub async fn list_farms(
    farm_service: web::Data<FarmService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match farm_service.list_farms(user_id).await {
        Ok(farms) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": farms
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/farms",
    tag = "farms",
    request_body = CreateFarmRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fazenda cadastrada", body = FarmResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_farm(
    farm_service: web::Data<FarmService>,
    req: HttpRequest,
    request: web::Json<CreateFarmRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match farm_service.create_farm(user_id, request.into_inner()).await {
        Ok(farm) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": farm
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/farms/{id}",
    tag = "farms",
    params(
        ("id" = i64, Path, description = "Id da fazenda")
    ),
    request_body = UpdateFarmRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fazenda atualizada", body = FarmResponse),
        (status = 404, description = "Fazenda não encontrada")
    )
)]
pub async fn update_farm(
    farm_service: web::Data<FarmService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateFarmRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let farm_id = path.into_inner();

    match farm_service
        .update_farm(user_id, farm_id, request.into_inner())
        .await
    {
        Ok(farm) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": farm
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/farms/{id}/activate",
    tag = "farms",
    params(
        ("id" = i64, Path, description = "Id da fazenda")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fazenda ativada para o painel de clima", body = FarmResponse)
    )
)]
pub async fn activate_farm(
    farm_service: web::Data<FarmService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let farm_id = path.into_inner();

    match farm_service.activate_farm(user_id, farm_id).await {
        Ok(farm) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": farm
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/farms/{id}",
    tag = "farms",
    params(
        ("id" = i64, Path, description = "Id da fazenda")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Fazenda removida"),
        (status = 404, description = "Fazenda não encontrada")
    )
)]
pub async fn delete_farm(
    farm_service: web::Data<FarmService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let farm_id = path.into_inner();

    match farm_service.delete_farm(user_id, farm_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Fazenda removida"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn farm_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/farms")
            .route("", web::get().to(list_farms))
            .route("", web::post().to(create_farm))
            .route("/{id}", web::put().to(update_farm))
            .route("/{id}/activate", web::post().to(activate_farm))
            .route("/{id}", web::delete().to(delete_farm)),
    );
}

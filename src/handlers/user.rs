use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/user/profile",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Perfil e uso do mês corrente", body = UserResponse),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match user_service.get_profile(user_id).await {
        Ok((user, usage)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "user": user,
                "usage": usage
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/user/profile",
    tag = "user",
    request_body = UpdateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Perfil atualizado", body = UserResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn update_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match user_service.update_profile(user_id, request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "user": user
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/user/usage",
    tag = "user",
    params(
        ("month" = Option<String>, Query, description = "Mês no formato AAAA-MM, padrão mês corrente")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Contadores de uso do mês", body = UsageSummary)
    )
)]
pub async fn get_usage(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    query: web::Query<UsageQuery>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match user_service.get_usage(user_id, query.into_inner().month).await {
        Ok(usage) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": usage
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/user/account",
    tag = "user",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Conta desativada")
    )
)]
pub async fn deactivate_account(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match user_service.deactivate(user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Conta desativada"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::put().to(update_profile))
            .route("/usage", web::get().to(get_usage))
            .route("/account", web::delete().to(deactivate_account)),
    );
}

use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::PlanService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/plans",
    tag = "plans",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Catálogo de planos", body = [PlanInfo])
    )
)]
pub async fn list_plans(plan_service: web::Data<PlanService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": plan_service.catalog()
    })))
}

#[utoipa::path(
    post,
    path = "/plans/upgrade-intent",
    tag = "plans",
    request_body = CreateUpgradeIntentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "SetupIntent criado para validação do cartão", body = CreateUpgradeIntentResponse),
        (status = 400, description = "Transição de plano inválida")
    )
)]
pub async fn create_upgrade_intent(
    plan_service: web::Data<PlanService>,
    req: HttpRequest,
    request: web::Json<CreateUpgradeIntentRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match plan_service
        .create_upgrade_intent(user_id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/plans/confirm",
    tag = "plans",
    request_body = ConfirmUpgradeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Plano ativado após verificação do pagamento", body = ConfirmUpgradeResponse),
        (status = 400, description = "Pagamento não confirmado pelo processador")
    )
)]
pub async fn confirm_upgrade(
    plan_service: web::Data<PlanService>,
    req: HttpRequest,
    request: web::Json<ConfirmUpgradeRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match plan_service
        .confirm_upgrade(user_id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn plans_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/plans")
            .route("", web::get().to(list_plans))
            .route("/upgrade-intent", web::post().to(create_upgrade_intent))
            .route("/confirm", web::post().to(confirm_upgrade)),
    );
}

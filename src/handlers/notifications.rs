use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::{NotificationService, UserService};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    params(
        ("page" = Option<i64>, Query, description = "Página"),
        ("page_size" = Option<i64>, Query, description = "Itens por página")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Notificações em ordem decrescente de criação")
    )
)]
pub async fn list_notifications(
    notification_service: web::Data<NotificationService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match notification_service.list(user_id, &query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/notifications/unread-count",
    tag = "notifications",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Total de notificações não lidas", body = UnreadCountResponse)
    )
)]
pub async fn unread_count(
    notification_service: web::Data<NotificationService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match notification_service.unread_count(user_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/notifications/{id}/read",
    tag = "notifications",
    params(
        ("id" = i64, Path, description = "Id da notificação")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Notificação marcada como lida", body = NotificationResponse),
        (status = 404, description = "Notificação não encontrada")
    )
)]
pub async fn mark_read(
    notification_service: web::Data<NotificationService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let notification_id = path.into_inner();

    match notification_service.mark_read(user_id, notification_id).await {
        Ok(notification) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": notification
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/notifications/read-all",
    tag = "notifications",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Todas as notificações marcadas como lidas")
    )
)]
pub async fn mark_all_read(
    notification_service: web::Data<NotificationService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match notification_service.mark_all_read(user_id).await {
        Ok(updated) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "updated": updated
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/notifications/activity",
    tag = "notifications",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Atividade registrada para o alerta de inatividade")
    )
)]
pub async fn record_activity(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match user_service.record_activity(user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Atividade registrada"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn notifications_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(list_notifications))
            .route("/unread-count", web::get().to(unread_count))
            .route("/read-all", web::put().to(mark_all_read))
            .route("/activity", web::post().to(record_activity))
            .route("/{id}/read", web::put().to(mark_read)),
    );
}

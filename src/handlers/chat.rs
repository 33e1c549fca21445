use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::AssistantService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/chat/messages",
    tag = "chat",
    request_body = SendMessageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Resposta do Dr. Agro", body = SendMessageResponse),
        (status = 402, description = "Cota mensal de consultas esgotada")
    )
)]
pub async fn send_message(
    assistant_service: web::Data<AssistantService>,
    req: HttpRequest,
    request: web::Json<SendMessageRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match assistant_service
        .send_message(user_id, request.into_inner())
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
    get,
    path = "/chat/messages",
    tag = "chat",
    params(
        ("page" = Option<i64>, Query, description = "Página"),
        ("page_size" = Option<i64>, Query, description = "Itens por página")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Histórico de mensagens")
    )
)]
pub async fn get_history(
    assistant_service: web::Data<AssistantService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match assistant_service.history(user_id, &query.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn chat_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chat")
            .route("/messages", web::post().to(send_message))
            .route("/messages", web::get().to(get_history)),
    );
}

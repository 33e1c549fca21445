use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::CalendarService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/calendar/events",
    tag = "calendar",
    params(
        ("page" = Option<i64>, Query, description = "Página"),
        ("page_size" = Option<i64>, Query, description = "Itens por página")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Eventos ordenados por data")
    )
)]
pub async fn list_events(
    calendar_service: web::Data<CalendarService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match calendar_service
        .list_events(user_id, &query.into_inner())
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
    path = "/calendar/events",
    tag = "calendar",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Evento criado", body = EventResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_event(
    calendar_service: web::Data<CalendarService>,
    req: HttpRequest,
    request: web::Json<CreateEventRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match calendar_service
        .create_event(user_id, request.into_inner())
        .await
    {
        Ok(event) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": event
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/calendar/events/{id}",
    tag = "calendar",
    params(
        ("id" = i64, Path, description = "Id do evento")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Evento atualizado", body = EventResponse),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn update_event(
    calendar_service: web::Data<CalendarService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateEventRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let event_id = path.into_inner();

    match calendar_service
        .update_event(user_id, event_id, request.into_inner())
        .await
    {
        Ok(event) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": event
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/calendar/events/{id}",
    tag = "calendar",
    params(
        ("id" = i64, Path, description = "Id do evento")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Evento removido"),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn delete_event(
    calendar_service: web::Data<CalendarService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let event_id = path.into_inner();

    match calendar_service.delete_event(user_id, event_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Evento removido"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn calendar_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calendar")
            .route("/events", web::get().to(list_events))
            .route("/events", web::post().to(create_event))
            .route("/events/{id}", web::put().to(update_event))
            .route("/events/{id}", web::delete().to(delete_event)),
    );
}

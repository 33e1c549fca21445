use crate::handlers::current_user_id;
use crate::models::*;
use crate::services::LearningService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/learning/tracks",
    tag = "learning",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Trilhas com flag de acesso por plano", body = [TrackSummary])
    )
)]
pub async fn list_tracks(
    learning_service: web::Data<LearningService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match learning_service.list_tracks(user_id).await {
        Ok(tracks) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tracks
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/learning/tracks/{id}",
    tag = "learning",
    params(
        ("id" = i64, Path, description = "Id da trilha")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Trilha com vídeos e progresso", body = TrackDetailResponse),
        (status = 403, description = "Trilha fora do plano atual")
    )
)]
pub async fn get_track(
    learning_service: web::Data<LearningService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let track_id = path.into_inner();

    match learning_service.get_track(user_id, track_id).await {
        Ok(track) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": track
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/learning/videos/{id}/progress",
    tag = "learning",
    params(
        ("id" = i64, Path, description = "Id do vídeo")
    ),
    request_body = UpdateProgressRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Progresso atualizado", body = UpdateProgressResponse)
    )
)]
pub async fn update_progress(
    learning_service: web::Data<LearningService>,
    req: HttpRequest,
    path: web::Path<i64>,
    request: web::Json<UpdateProgressRequest>,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);
    let video_id = path.into_inner();

    match learning_service
        .update_progress(user_id, video_id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn learning_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/learning")
            .route("/tracks", web::get().to(list_tracks))
            .route("/tracks/{id}", web::get().to(get_track))
            .route("/videos/{id}/progress", web::put().to(update_progress)),
    );
}

use crate::handlers::current_user_id;
use crate::services::WeatherService;
use crate::services::weather_service::{FarmForecastResponse, FarmWeatherResponse};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/weather/current",
    tag = "weather",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Clima atual da fazenda ativa", body = FarmWeatherResponse),
        (status = 404, description = "Nenhuma fazenda ativa cadastrada")
    )
)]
pub async fn current_weather(
    weather_service: web::Data<WeatherService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match weather_service.current(user_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/weather/forecast",
    tag = "weather",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Previsão para a fazenda ativa", body = FarmForecastResponse),
        (status = 404, description = "Nenhuma fazenda ativa cadastrada")
    )
)]
pub async fn forecast(
    weather_service: web::Data<WeatherService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = current_user_id(&req);

    match weather_service.forecast(user_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn weather_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/weather")
            .route("/current", web::get().to(current_weather))
            .route("/forecast", web::get().to(forecast)),
    );
}

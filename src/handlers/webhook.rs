use crate::external::StripeService;
use crate::services::PlanService;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::{error, info};
use serde_json::json;

/// Stripe retries on non-2xx. Processing failures after a valid parse are
/// acknowledged with 200 so a poison event does not retry forever.
#[utoipa::path(
    post,
    path = "/webhook/stripe",
    tag = "webhook",
    responses(
        (status = 200, description = "Evento recebido"),
        (status = 400, description = "Assinatura inválida")
    )
)]
pub async fn stripe_webhook(
    stripe_service: web::Data<StripeService>,
    plan_service: web::Data<PlanService>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let signature = req
        .headers()
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let payload = String::from_utf8_lossy(&body);

    let event = match stripe_service.parse_webhook_event(&payload, signature) {
        Ok(event) => event,
        Err(e) => {
            error!("stripe webhook rejected: {}", e);
            return Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": {
                    "code": "INVALID_SIGNATURE",
                    "message": "Assinatura do webhook inválida"
                }
            })));
        }
    };

    info!("stripe webhook {} ({})", event.event_type, event.id);

    if let Err(e) = plan_service.apply_webhook_event(event).await {
        error!("stripe webhook processing failed: {}", e);
    }

    Ok(HttpResponse::Ok().json(json!({ "received": true })))
}

pub fn webhook_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhook").route("/stripe", web::post().to(stripe_webhook)));
}

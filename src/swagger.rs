use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::external::weather::{CurrentWeather, ForecastEntry};
use crate::handlers;
use crate::models::*;
use crate::services::weather_service::{FarmForecastResponse, FarmWeatherResponse};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::user::get_profile,
        handlers::user::update_profile,
        handlers::user::get_usage,
        handlers::user::deactivate_account,
        handlers::plans::list_plans,
        handlers::plans::create_upgrade_intent,
        handlers::plans::confirm_upgrade,
        handlers::chat::send_message,
        handlers::chat::get_history,
        handlers::learning::list_tracks,
        handlers::learning::get_track,
        handlers::learning::update_progress,
        handlers::calendar::list_events,
        handlers::calendar::create_event,
        handlers::calendar::update_event,
        handlers::calendar::delete_event,
        handlers::farm::list_farms,
        handlers::farm::create_farm,
        handlers::farm::update_farm,
        handlers::farm::activate_farm,
        handlers::farm::delete_farm,
        handlers::weather::current_weather,
        handlers::weather::forecast,
        handlers::store::list_products,
        handlers::store::get_cart,
        handlers::store::add_to_cart,
        handlers::store::update_cart_item,
        handlers::store::remove_cart_item,
        handlers::notifications::list_notifications,
        handlers::notifications::unread_count,
        handlers::notifications::mark_read,
        handlers::notifications::mark_all_read,
        handlers::notifications::record_activity,
        handlers::admin::list_users,
        handlers::admin::create_product,
        handlers::admin::update_product,
        handlers::admin::create_track,
        handlers::admin::create_video,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UpdateUserRequest,
            UserResponse,
            AuthResponse,
            UsageSummary,
            PlanTier,
            UpgradeStatus,
            PlanInfo,
            CreateUpgradeIntentRequest,
            CreateUpgradeIntentResponse,
            ConfirmUpgradeRequest,
            ConfirmUpgradeResponse,
            SendMessageRequest,
            SendMessageResponse,
            ChatMessageResponse,
            TrackSummary,
            TrackDetailResponse,
            VideoWithProgress,
            UpdateProgressRequest,
            UpdateProgressResponse,
            CreateTrackRequest,
            CreateVideoRequest,
            CreateEventRequest,
            UpdateEventRequest,
            EventResponse,
            CreateFarmRequest,
            UpdateFarmRequest,
            FarmResponse,
            CurrentWeather,
            ForecastEntry,
            FarmWeatherResponse,
            FarmForecastResponse,
            ProductResponse,
            CreateProductRequest,
            UpdateProductRequest,
            AddToCartRequest,
            UpdateCartItemRequest,
            CartLineItem,
            CartResponse,
            NotificationResponse,
            UnreadCountResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Cadastro e autenticação"),
        (name = "user", description = "Perfil e uso"),
        (name = "plans", description = "Planos e upgrade de assinatura"),
        (name = "chat", description = "Assistente Dr. Agro"),
        (name = "learning", description = "Trilhas de aprendizado"),
        (name = "calendar", description = "Calendário agrícola"),
        (name = "farms", description = "Fazendas"),
        (name = "weather", description = "Clima da fazenda ativa"),
        (name = "store", description = "Loja e carrinho"),
        (name = "notifications", description = "Notificações"),
        (name = "admin", description = "Administração"),
        (name = "webhook", description = "Webhooks de pagamento"),
    ),
    info(
        title = "Dr. Agro Backend API",
        version = "1.0.0",
        description = "API REST do backend Dr. Agro",
        contact(
            name = "Suporte",
            email = "suporte@dragro.com.br"
        )
    ),
    servers(
        (url = "/api/v1", description = "Servidor local")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

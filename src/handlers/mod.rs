pub mod admin;
pub mod auth;
pub mod calendar;
pub mod chat;
pub mod farm;
pub mod learning;
pub mod notifications;
pub mod plans;
pub mod store;
pub mod user;
pub mod weather;
pub mod webhook;

pub use admin::admin_config;
pub use auth::auth_config;
pub use calendar::calendar_config;
pub use chat::chat_config;
pub use farm::farm_config;
pub use learning::learning_config;
pub use notifications::notifications_config;
pub use plans::plans_config;
pub use store::store_config;
pub use user::user_config;
pub use weather::weather_config;
pub use webhook::webhook_config;

use actix_web::{HttpMessage, HttpRequest};

/// The auth middleware stores the authenticated user id in request
/// extensions; public routes never reach handlers that call this.
pub(crate) fn current_user_id(req: &HttpRequest) -> i64 {
    req.extensions().get::<i64>().copied().unwrap_or(0)
}

pub mod assistant_service;
pub mod auth_service;
pub mod calendar_service;
pub mod farm_service;
pub mod learning_service;
pub mod notification_service;
pub mod plan_service;
pub mod store_service;
pub mod usage_service;
pub mod user_service;
pub mod weather_service;

pub use assistant_service::*;
pub use auth_service::*;
pub use calendar_service::*;
pub use farm_service::*;
pub use learning_service::*;
pub use notification_service::*;
pub use plan_service::*;
pub use store_service::*;
pub use usage_service::*;
pub use user_service::*;
pub use weather_service::*;

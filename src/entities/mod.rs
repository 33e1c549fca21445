pub mod calendar_events;
pub mod cart_items;
pub mod chat_messages;
pub mod farms;
pub mod notifications;
pub mod plan_upgrades;
pub mod products;
pub mod tracks;
pub mod user_usage;
pub mod users;
pub mod video_progress;
pub mod videos;

pub use calendar_events as calendar_event_entity;
pub use cart_items as cart_item_entity;
pub use chat_messages as chat_message_entity;
pub use farms as farm_entity;
pub use notifications as notification_entity;
pub use plan_upgrades as plan_upgrade_entity;
pub use products as product_entity;
pub use tracks as track_entity;
pub use user_usage as user_usage_entity;
pub use users as user_entity;
pub use video_progress as video_progress_entity;
pub use videos as video_entity;

pub mod calendar;
pub mod chat;
pub mod common;
pub mod farm;
pub mod learning;
pub mod notification;
pub mod pagination;
pub mod plan;
pub mod store;
pub mod usage;
pub mod user;

pub use calendar::*;
pub use chat::*;
pub use common::*;
pub use farm::*;
pub use learning::*;
pub use notification::*;
pub use pagination::*;
pub use plan::*;
pub use store::*;
pub use usage::*;
pub use user::*;

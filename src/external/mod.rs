pub mod assistant;
pub mod stripe;
pub mod weather;

pub use assistant::AssistantClient;
pub use stripe::StripeService;
pub use weather::WeatherClient;

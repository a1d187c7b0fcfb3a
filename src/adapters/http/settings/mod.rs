//! HTTP adapter for settings.

mod dto;
mod handlers;
mod routes;

pub use dto::{SlackSettingsResponse, UpdateSlackWebhookRequest};
pub use handlers::SettingsHandlers;
pub use routes::settings_routes;

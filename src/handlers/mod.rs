pub mod api_v1;
pub mod audit_handlers;
pub mod auth_handlers;
pub mod speaker_handlers;
pub mod talk_handlers;

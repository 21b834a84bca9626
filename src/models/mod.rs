pub mod permission;
pub mod setting;
pub mod speaker;
pub mod talk;
pub mod talk_type;
pub mod talk_url;
pub mod user;

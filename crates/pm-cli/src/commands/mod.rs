pub mod auth;
pub mod dispatch;
pub mod patient;
pub mod user;

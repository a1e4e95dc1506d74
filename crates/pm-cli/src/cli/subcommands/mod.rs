pub mod auth;
pub mod patient;
pub mod user;

pub use auth::AuthCommands;
pub use patient::PatientCommands;
pub use user::UserCommands;

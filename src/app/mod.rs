pub mod app;
pub mod auth;
pub mod mode;

pub use app::{App, DEFAULT_TEXT};
pub use auth::{AdminGate, SecretGate};
pub use mode::AppMode;

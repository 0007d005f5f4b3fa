pub mod api;
pub mod cart;
pub mod client;
pub mod configuration;
pub mod error;
pub mod models;
pub mod session;
pub mod startup;
pub mod storage;
pub mod telemetry;

pub use cart::CartStore;
pub use client::{ApiClient, LoginRedirect};
pub use configuration::get_configuration;
pub use error::ConciergeError;
pub use session::AuthSession;
pub use startup::{build_app, build_app_with, Application};

pub type Result<T> = std::result::Result<T, ConciergeError>;

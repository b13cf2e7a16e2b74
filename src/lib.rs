//! In-memory FAQ service with image uploads and a translation pass-through.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod translation;
pub mod uploads;

pub use config::FaqConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

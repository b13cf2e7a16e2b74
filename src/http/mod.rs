//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (middleware: request id, trace, CORS, timeout, body limit)
//!     → faqs.rs      GET/POST /faqs, GET/PUT/DELETE /faqs/{id}
//!        form.rs     (multipart / urlencoded body → FaqForm)
//!     → uploads.rs   GET /uploads/{filename}
//!     → translate.rs POST /translate
//!     → error.rs (ApiError → {"error": ...} with status)
//! ```
//!
//! Each request is independent; the only shared mutable state is the
//! FAQ store and the upload directory.

pub mod error;
pub mod faqs;
pub mod form;
pub mod request;
pub mod server;
pub mod translate;
pub mod uploads;

pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer, ServerError};

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Per request:
//!     → x-request-id assigned (http/request.rs)
//!     → TraceLayer span carrying method, path, status, latency
//! ```
//!
//! # Design Decisions
//! - Record ids are logged, question/answer text never is
//! - Request ID flows from request to response headers

pub mod logging;

pub use logging::init_logging;

//! FAQ storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → memory.rs (lock, scan, mutate)
//!     → record.rs (FaqRecord snapshot returned by value)
//! ```
//!
//! # Design Decisions
//! - Records live only in process memory and are lost on restart
//! - Insertion order is the listing order
//! - New id = max existing id + 1, so the newest id can be reused after deletion

pub mod memory;
pub mod record;

pub use memory::{FaqStore, StoreError, StoreResult};
pub use record::{FaqPatch, FaqRecord};

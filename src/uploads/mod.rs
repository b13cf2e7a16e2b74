//! Image upload subsystem.
//!
//! # Data Flow
//! ```text
//! multipart `image` part (client filename + bytes)
//!     → filename.rs (sanitize to a flat ASCII name)
//!     → storage.rs (write into the upload directory)
//!     → "/uploads/<name>" stored on the FAQ record
//!
//! GET /uploads/<name>
//!     → storage.rs (reject escaping names, check existence)
//!     → file served with a guessed content type
//! ```
//!
//! # Known Limitations
//! - Two uploads that sanitize to the same name overwrite each other
//!   (last write wins)

pub mod filename;
pub mod storage;

pub use filename::sanitize_filename;
pub use storage::{UploadDir, UploadError, PUBLIC_PREFIX};

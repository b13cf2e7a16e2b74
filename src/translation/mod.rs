//! Translation adapter subsystem.
//!
//! # Data Flow
//! ```text
//! POST /translate {text, targetLanguage}
//!     → provider.rs (Translator::translate_checked)
//!         → languages.rs (reject unknown codes before any network call)
//!         → google.rs (single HTTP call, bounded by timeout)
//!     → translated text or TranslateError
//! ```
//!
//! # Design Decisions
//! - The provider sits behind the `Translator` trait so tests swap it out
//! - No retries: one attempt per request, success or failure

pub mod google;
pub mod languages;
pub mod provider;

pub use google::GoogleTranslator;
pub use provider::{TranslateError, TranslateResult, Translator};

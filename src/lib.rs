//! Core data model for the Chorale media catalogue client.
//!
//! Everything here is a plain, single-threaded value type: entities parsed
//! from catalogue documents, with invariants enforced by their setters.
//! Transport and the catalogue protocol live in the client crates.

pub mod element;
pub mod error;
pub mod hex;
pub mod media;
pub mod prelude;
pub mod restriction;

// Intentionally curated re-exports for downstream consumers.
pub use element::Element;
pub use error::{ModelError, Result as ModelResult};
pub use media::Media;
pub use restriction::Restriction;

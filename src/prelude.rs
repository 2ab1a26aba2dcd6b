//! Consumer-facing snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in the client or presentation layers.

pub use super::element::Element;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::media::{ID_LENGTH, Media};
pub use super::restriction::Restriction;

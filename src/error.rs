use thiserror::Error;

/// Errors produced by model constructors, validated setters and the
/// element-deserialization routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Media ids are 32-character hexadecimal strings.
    #[error("expected a 32-character hex id, got {0:?}")]
    InvalidId(String),

    /// Popularity is a score from 0.0 to 1.0, or NaN when unknown.
    #[error("expected a popularity from 0.0 to 1.0 or NaN, got {0}")]
    InvalidPopularity(f32),

    /// Country codes are 2-letter ISO 3166-1 strings.
    #[error("expected a 2-letter country code, got {0:?}")]
    InvalidCountry(String),

    /// A `popularity` child held text that is not a floating-point number.
    #[error("unparsable popularity value {text:?}")]
    ParsePopularity {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The document handed to [`Element::parse`](crate::Element::parse) is
    /// not well-formed XML.
    #[error("malformed document: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

//! The media entity shared by every catalogue item kind.

use std::collections::HashMap;

use crate::element::Element;
use crate::error::{ModelError, Result};
use crate::hex;
use crate::restriction::Restriction;

/// Length of a catalogue media id, in hex digits.
pub const ID_LENGTH: usize = 32;

/// A piece of catalogue media: identifier, popularity score, geographic
/// restrictions and cross-service external ids.
///
/// All fields are reached through validated accessors; a setter that fails
/// leaves the previous value in place. Popularity uses `f32::NAN` as the
/// "unknown" sentinel, so a fresh instance compares unequal to itself on
/// that field and the type does not implement `PartialEq`.
///
/// The type holds no synchronization of its own; share it across threads
/// only behind external locking.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Media {
    id: Option<String>,
    popularity: f32,
    restrictions: Vec<Restriction>,
    external_ids: HashMap<String, String>,
}

impl Media {
    /// Creates an empty media entity: no id, unknown popularity, no
    /// restrictions, no external ids.
    pub fn new() -> Self {
        Self {
            id: None,
            popularity: f32::NAN,
            restrictions: Vec::new(),
            external_ids: HashMap::new(),
        }
    }

    /// Creates a media entity with the given id.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidId`] unless `id` is a 32-character hex string.
    pub fn with_id(id: impl Into<String>) -> Result<Self> {
        let mut media = Self::new();
        media.set_id(id)?;
        Ok(media)
    }

    /// The media id, exactly as set. None until one is assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the media id, preserving its case.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidId`] unless `id` is a 32-character hex string;
    /// the previous id is kept.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if id.chars().count() != ID_LENGTH || !hex::is_hex(&id) {
            return Err(ModelError::InvalidId(id));
        }
        self.id = Some(id);
        Ok(())
    }

    /// The popularity score, `f32::NAN` when unknown.
    pub fn popularity(&self) -> f32 {
        self.popularity
    }

    /// Sets the popularity score.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidPopularity`] unless `popularity` is in
    /// `0.0..=1.0` or is NaN; the previous value is kept.
    pub fn set_popularity(&mut self, popularity: f32) -> Result<()> {
        if !popularity.is_nan() && !(0.0..=1.0).contains(&popularity) {
            return Err(ModelError::InvalidPopularity(popularity));
        }
        self.popularity = popularity;
        Ok(())
    }

    /// The restriction rules, in the order the catalogue sent them.
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// Replaces the restriction rules wholesale.
    pub fn set_restrictions(&mut self, restrictions: Vec<Restriction>) {
        self.restrictions = restrictions;
    }

    /// Checks whether this media is restricted for a country within a
    /// catalogue.
    ///
    /// The first rule that applies to `catalogue` and blocks `country`
    /// decides the answer. A rule blocks when the country is explicitly
    /// forbidden or not explicitly allowed; both sides must be consulted,
    /// since a rule usually defines only one of its two lists and the other
    /// defaults the opposite way.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidCountry`] unless `country` is exactly two
    /// characters.
    pub fn is_restricted(&self, country: &str, catalogue: &str) -> Result<bool> {
        if country.chars().count() != 2 {
            return Err(ModelError::InvalidCountry(country.to_string()));
        }

        Ok(self.restrictions.iter().any(|restriction| {
            restriction.is_catalogue(catalogue)
                && (restriction.is_forbidden(country)
                    || !restriction.is_allowed(country))
        }))
    }

    /// External ids keyed by service name.
    pub fn external_ids(&self) -> &HashMap<String, String> {
        &self.external_ids
    }

    /// Replaces the external-id map wholesale.
    pub fn set_external_ids(&mut self, external_ids: HashMap<String, String>) {
        self.external_ids = external_ids;
    }

    /// This media's id in the given service's namespace, if known.
    pub fn external_id(&self, service: &str) -> Option<&str> {
        self.external_ids.get(service).map(String::as_str)
    }

    /// Builds a media entity from a parsed catalogue element.
    ///
    /// An `id` child is taken verbatim and a `popularity` child is parsed as
    /// a float, both assigned without going through the validated setters:
    /// the feed is taken at its word, and a malformed feed yields an entity
    /// whose accessors report the malformed values as-is. Other children are
    /// left to the richer item-kind parsers.
    ///
    /// # Errors
    ///
    /// [`ModelError::ParsePopularity`] when the `popularity` text is not a
    /// floating-point number.
    pub fn from_element(element: &Element) -> Result<Self> {
        let mut media = Self::new();

        if let Some(id) = element.child_text("id") {
            media.id = Some(id.to_string());
        }

        if let Some(text) = element.child_text("popularity") {
            media.popularity =
                text.parse().map_err(|source| ModelError::ParsePopularity {
                    text: text.to_string(),
                    source,
                })?;
        }

        Ok(media)
    }
}

impl Default for Media {
    fn default() -> Self {
        Self::new()
    }
}

//! Geographic and catalogue restrictions.

use crate::element::Element;

/// A restriction rule scoped to one or more catalogues.
///
/// Each rule carries an optional forbidden-country list and an optional
/// allowed-country list. The catalogue encodes the lists as comma-separated
/// element attributes and usually sends only one of the two; an absent
/// forbidden list forbids nothing, while an absent allowed list allows
/// everything. The two sides are deliberately asymmetric, so restriction
/// evaluation has to consult both (see
/// [`Media::is_restricted`](crate::Media::is_restricted)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restriction {
    catalogues: Vec<String>,
    forbidden: Option<Vec<String>>,
    allowed: Option<Vec<String>>,
}

impl Restriction {
    pub fn new(
        catalogues: Vec<String>,
        forbidden: Option<Vec<String>>,
        allowed: Option<Vec<String>>,
    ) -> Self {
        Self {
            catalogues,
            forbidden,
            allowed,
        }
    }

    /// Builds a restriction from a `restriction` element's `catalogues`,
    /// `forbidden` and `allowed` attributes. Absent attributes become absent
    /// lists, preserving their permissive/restrictive defaults.
    pub fn from_element(element: &Element) -> Self {
        Self {
            catalogues: split_list(element.attribute("catalogues"))
                .unwrap_or_default(),
            forbidden: split_list(element.attribute("forbidden")),
            allowed: split_list(element.attribute("allowed")),
        }
    }

    /// Returns true if this rule applies to the given catalogue.
    pub fn is_catalogue(&self, catalogue: &str) -> bool {
        self.catalogues.iter().any(|c| c == catalogue)
    }

    /// Returns true if the country is on the forbidden list.
    pub fn is_forbidden(&self, country: &str) -> bool {
        self.forbidden
            .as_deref()
            .is_some_and(|list| list.iter().any(|c| c == country))
    }

    /// Returns true if the country is on the allowed list, or if no allowed
    /// list was given.
    pub fn is_allowed(&self, country: &str) -> bool {
        self.allowed
            .as_deref()
            .is_none_or(|list| list.iter().any(|c| c == country))
    }

    pub fn catalogues(&self) -> &[String] {
        &self.catalogues
    }

    pub fn forbidden(&self) -> Option<&[String]> {
        self.forbidden.as_deref()
    }

    pub fn allowed(&self) -> Option<&[String]> {
        self.allowed.as_deref()
    }
}

fn split_list(value: Option<&str>) -> Option<Vec<String>> {
    let value = value?;
    Some(
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::Restriction;
    use crate::element::Element;

    fn catalogues(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn catalogue_membership_is_exact() {
        let restriction =
            Restriction::new(catalogues(&["on-demand", "radio"]), None, None);

        assert!(restriction.is_catalogue("on-demand"));
        assert!(restriction.is_catalogue("radio"));
        assert!(!restriction.is_catalogue("shuffle"));
        assert!(!restriction.is_catalogue("on-demand "));
    }

    #[test]
    fn absent_forbidden_list_forbids_nothing() {
        let restriction = Restriction::new(catalogues(&["on-demand"]), None, None);
        assert!(!restriction.is_forbidden("US"));
    }

    #[test]
    fn forbidden_list_matches_listed_countries_only() {
        let restriction = Restriction::new(
            catalogues(&["on-demand"]),
            Some(vec!["US".into(), "CA".into()]),
            None,
        );

        assert!(restriction.is_forbidden("US"));
        assert!(restriction.is_forbidden("CA"));
        assert!(!restriction.is_forbidden("DE"));
    }

    #[test]
    fn absent_allowed_list_allows_everything() {
        let restriction = Restriction::new(catalogues(&["on-demand"]), None, None);
        assert!(restriction.is_allowed("US"));
        assert!(restriction.is_allowed("DE"));
    }

    #[test]
    fn allowed_list_rejects_unlisted_countries() {
        let restriction = Restriction::new(
            catalogues(&["on-demand"]),
            None,
            Some(vec!["DE".into()]),
        );

        assert!(restriction.is_allowed("DE"));
        assert!(!restriction.is_allowed("FR"));
    }

    #[test]
    fn builds_from_attribute_encoded_element() {
        let element = Element::parse(
            r#"<restriction catalogues="on-demand,radio" forbidden="US, CA" />"#,
        )
        .unwrap();
        let restriction = Restriction::from_element(&element);

        assert_eq!(restriction.catalogues(), ["on-demand", "radio"]);
        assert_eq!(restriction.forbidden(), Some(&["US".into(), "CA".into()][..]));
        assert_eq!(restriction.allowed(), None);
        assert!(restriction.is_forbidden("CA"));
        assert!(restriction.is_allowed("DE"));
    }

    #[test]
    fn missing_attributes_keep_their_defaults() {
        let element = Element::parse("<restriction/>").unwrap();
        let restriction = Restriction::from_element(&element);

        assert!(restriction.catalogues().is_empty());
        assert_eq!(restriction.forbidden(), None);
        assert_eq!(restriction.allowed(), None);
        assert!(!restriction.is_catalogue("on-demand"));
    }
}

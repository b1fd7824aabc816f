//! Read-only location reference data
//!
//! The host picks `base_location` / `cities_catered` values from a flat,
//! pre-loaded list of names. The engine never validates against the list;
//! it only carries it for the selection widgets.

use serde::{Deserialize, Serialize};

/// A flat catalog of selectable location names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCatalog {
    names: Vec<String>,
}

impl LocationCatalog {
    /// Creates a catalog from a list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A small bundled district list for demos and tests.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new([
            "Alappuzha",
            "Ernakulam",
            "Idukki",
            "Kannur",
            "Kasaragod",
            "Kollam",
            "Kottayam",
            "Kozhikode",
            "Malappuram",
            "Palakkad",
            "Pathanamthitta",
            "Thiruvananthapuram",
            "Thrissur",
            "Wayanad",
        ])
    }

    /// Iterates over the names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether a name appears in the catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_is_usable() {
        let catalog = LocationCatalog::bundled();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("Ernakulam"));
        assert!(!catalog.contains("Atlantis"));
    }

    #[test]
    fn custom_catalog() {
        let catalog = LocationCatalog::new(["Pune", "Nashik"]);
        assert_eq!(catalog.len(), 2);
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Pune", "Nashik"]);
    }
}

//! Municipality enumeration.
//!
//! The form only needs set membership; how the list is produced, searched or
//! displayed belongs to the source adapter and the UI.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One selectable municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityOption {
    pub label: String,
    pub value: String,
}

impl MunicipalityOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered municipality list with value lookup.
#[derive(Debug, Clone, Default)]
pub struct MunicipalityCatalog {
    options: Vec<MunicipalityOption>,
    values: HashSet<String>,
}

impl MunicipalityCatalog {
    /// Build a catalog keeping the first option for each value.
    ///
    /// Returns the catalog and the values that were dropped as duplicates.
    pub fn from_options(options: Vec<MunicipalityOption>) -> (Self, Vec<String>) {
        let mut catalog = Self::default();
        let mut duplicates = Vec::new();

        for option in options {
            if catalog.values.insert(option.value.clone()) {
                catalog.options.push(option);
            } else {
                duplicates.push(option.value);
            }
        }

        (catalog, duplicates)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn options(&self) -> &[MunicipalityOption] {
        &self.options
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The dealer's current facet selections (wood species, door style, ...).
/// One chosen value per facet; unset facets mean "any". Mutated only by
/// explicit selection, and every mutation must be followed by a recompute of
/// the quote lines that depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfiguration {
    selections: BTreeMap<String, String>,
}

impl GlobalConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.selections.insert(facet.into(), value.into());
    }

    pub fn clear(&mut self, facet: &str) {
        self.selections.remove(facet);
    }

    pub fn value(&self, facet: &str) -> Option<&str> {
        self.selections.get(facet).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections.iter().map(|(facet, value)| (facet.as_str(), value.as_str()))
    }
}

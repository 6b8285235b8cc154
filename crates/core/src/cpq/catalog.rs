use std::collections::BTreeSet;

use crate::domain::configuration::GlobalConfiguration;
use crate::domain::template::{ProductTemplate, TemplateId};

/// Read-only registry of product templates. Built once at startup (from the
/// demo fixtures or a catalog file) and shared by reference afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<ProductTemplate>,
}

impl Catalog {
    pub fn new(templates: Vec<ProductTemplate>) -> Self {
        Self { templates }
    }

    pub fn find(&self, template_id: &TemplateId) -> Option<&ProductTemplate> {
        self.templates.iter().find(|template| &template.id == template_id)
    }

    /// All templates, or only those in the given category. An unknown
    /// category is not an error; it just matches nothing.
    pub fn list_templates(&self, category: Option<&str>) -> Vec<&ProductTemplate> {
        self.templates
            .iter()
            .filter(|template| category.map_or(true, |wanted| template.category == wanted))
            .collect()
    }

    /// Union of the values every template declares for the facet. Empty when
    /// no template declares it.
    pub fn facet_values(&self, facet: &str) -> BTreeSet<String> {
        self.templates
            .iter()
            .filter_map(|template| template.config_options.get(facet))
            .flatten()
            .cloned()
            .collect()
    }

    /// Facet names declared by at least one template.
    pub fn facet_names(&self) -> BTreeSet<String> {
        self.templates
            .iter()
            .flat_map(|template| template.config_options.keys())
            .cloned()
            .collect()
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.templates.iter().map(|template| template.category.clone()).collect()
    }

    /// Templates compatible with the current selections. A selected facet
    /// only constrains templates that declare it; undeclared facets pass
    /// through unfiltered, so selecting a value no template supports still
    /// shows templates that simply never mention that facet.
    pub fn matching_templates(&self, configuration: &GlobalConfiguration) -> Vec<&ProductTemplate> {
        self.templates
            .iter()
            .filter(|template| {
                configuration.selections().all(|(facet, chosen)| {
                    template
                        .config_options
                        .get(facet)
                        .map_or(true, |values| values.iter().any(|value| value == chosen))
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

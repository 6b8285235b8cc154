use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Lead-time adjustment attached to a facet: either a flat week delta applied
/// regardless of the chosen value, or a per-value table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadTimeRule {
    Flat(i32),
    ByValue(BTreeMap<String, i32>),
}

/// A configurable product definition. Immutable once loaded; concrete quoted
/// line items derive their unit price and lead time from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub id: TemplateId,
    pub name: String,
    pub category: String,
    pub base_price: Decimal,
    pub base_lead_time_weeks: u32,
    /// Facet name -> values this template supports. Populates selection
    /// inputs; never enforced against the chosen configuration.
    #[serde(default)]
    pub config_options: BTreeMap<String, Vec<String>>,
    /// Facet name -> facet value -> price multiplier. Missing facet or value
    /// means multiplier 1.
    #[serde(default)]
    pub price_modifiers: BTreeMap<String, BTreeMap<String, Decimal>>,
    /// Facet name -> lead-time rule. Missing facet or value means delta 0.
    #[serde(default)]
    pub lead_time_modifiers: BTreeMap<String, LeadTimeRule>,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::template::TemplateId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub Uuid);

impl QuoteId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One (template, quantity) pair within a quote. `unit_price` and
/// `lead_time_weeks` are derived caches, recomputed from the catalog and the
/// current configuration on every change; the template id is the only
/// authoritative reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub template_id: TemplateId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub lead_time_weeks: u32,
}

impl LineItem {
    pub fn extended_price(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A single quotation-build session: the ordered line items plus the
/// order-level charge and discount fields the dealer enters. Insertion order
/// is display order. Lifecycle phase (draft/submitted/approved) is tracked by
/// the quotation book, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub project_ref: Option<String>,
    pub lines: Vec<LineItem>,
    pub shipping_cost: Decimal,
    pub assembly_charge: Decimal,
    pub other_charges: Decimal,
    /// Percentage in [0, 100].
    pub discount_rate: Decimal,
    /// Flat discount, additive to the rate-based discount.
    pub discount_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new() -> Self {
        Self {
            id: QuoteId::generate(),
            project_ref: None,
            lines: Vec::new(),
            shipping_cost: Decimal::ZERO,
            assembly_charge: Decimal::ZERO,
            other_charges: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            created_at: Utc::now(),
        }
    }

    pub fn line(&self, template_id: &TemplateId) -> Option<&LineItem> {
        self.lines.iter().find(|line| &line.template_id == template_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::new()
    }
}

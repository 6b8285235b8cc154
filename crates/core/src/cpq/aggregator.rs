use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cpq::catalog::Catalog;
use crate::cpq::resolver::{DeterministicTemplateResolver, TemplateResolver};
use crate::domain::configuration::GlobalConfiguration;
use crate::domain::quote::{LineItem, Quote};
use crate::domain::template::TemplateId;
use crate::errors::DomainError;

/// Order-level summary the presentation layer renders next to the line table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub subtotal: Decimal,
    pub total_discount: Decimal,
    pub grand_total: Decimal,
    pub max_lead_time_weeks: u32,
    pub total_item_count: u32,
}

pub fn subtotal(quote: &Quote) -> Decimal {
    quote.lines.iter().map(LineItem::extended_price).sum()
}

pub fn total_discount(quote: &Quote) -> Decimal {
    subtotal(quote) * quote.discount_rate / Decimal::ONE_HUNDRED + quote.discount_amount
}

/// Subtotal plus the order-level charges minus the discount. Deliberately not
/// clamped: a discount larger than everything else yields a negative total.
pub fn grand_total(quote: &Quote) -> Decimal {
    subtotal(quote) + quote.shipping_cost + quote.assembly_charge + quote.other_charges
        - total_discount(quote)
}

pub fn max_lead_time_weeks(quote: &Quote) -> u32 {
    quote.lines.iter().map(|line| line.lead_time_weeks).max().unwrap_or(0)
}

pub fn total_item_count(quote: &Quote) -> u32 {
    quote.lines.iter().map(|line| line.quantity).sum()
}

pub fn compute_totals(quote: &Quote) -> QuoteTotals {
    QuoteTotals {
        subtotal: subtotal(quote),
        total_discount: total_discount(quote),
        grand_total: grand_total(quote),
        max_lead_time_weeks: max_lead_time_weeks(quote),
        total_item_count: total_item_count(quote),
    }
}

/// The single mutable owner of a quote under construction. The catalog and
/// the global configuration are passed into every mutating call so the
/// derivation stays a pure function of its inputs; callers must invoke
/// `recompute_all` after changing the configuration.
pub struct QuoteAggregator<R = DeterministicTemplateResolver> {
    resolver: R,
    quote: Quote,
}

impl QuoteAggregator {
    pub fn new() -> Self {
        Self::with_resolver(DeterministicTemplateResolver, Quote::new())
    }

    pub fn from_quote(quote: Quote) -> Self {
        Self::with_resolver(DeterministicTemplateResolver, quote)
    }
}

impl Default for QuoteAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TemplateResolver> QuoteAggregator<R> {
    pub fn with_resolver(resolver: R, quote: Quote) -> Self {
        Self { resolver, quote }
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn into_quote(self) -> Quote {
        self.quote
    }

    /// Merge-or-append: an existing line gains `quantity`, a new line is
    /// appended with it. Either way the line is re-resolved against the
    /// current configuration. Quantity 0 is a no-op.
    pub fn add_line_item(
        &mut self,
        catalog: &Catalog,
        configuration: &GlobalConfiguration,
        template_id: &TemplateId,
        quantity: u32,
    ) -> Result<(), DomainError> {
        let template = catalog
            .find(template_id)
            .ok_or_else(|| DomainError::TemplateNotFound { template_id: template_id.clone() })?;

        if quantity == 0 {
            return Ok(());
        }

        let resolved = self.resolver.resolve(template, configuration);
        if let Some(line) =
            self.quote.lines.iter_mut().find(|line| &line.template_id == template_id)
        {
            line.quantity += quantity;
            line.unit_price = resolved.unit_price;
            line.lead_time_weeks = resolved.lead_time_weeks;
        } else {
            self.quote.lines.push(LineItem {
                template_id: template_id.clone(),
                quantity,
                unit_price: resolved.unit_price,
                lead_time_weeks: resolved.lead_time_weeks,
            });
        }

        Ok(())
    }

    /// Quantity 0 removes the line; anything positive updates it and
    /// re-resolves its price and lead time.
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        configuration: &GlobalConfiguration,
        template_id: &TemplateId,
        new_quantity: u32,
    ) -> Result<(), DomainError> {
        if new_quantity == 0 {
            let before = self.quote.lines.len();
            self.quote.lines.retain(|line| &line.template_id != template_id);
            if self.quote.lines.len() == before {
                return Err(DomainError::LineItemNotFound {
                    template_id: template_id.clone(),
                });
            }
            return Ok(());
        }

        let line = self
            .quote
            .lines
            .iter_mut()
            .find(|line| &line.template_id == template_id)
            .ok_or_else(|| DomainError::LineItemNotFound { template_id: template_id.clone() })?;

        line.quantity = new_quantity;
        if let Some(template) = catalog.find(template_id) {
            let resolved = self.resolver.resolve(template, configuration);
            line.unit_price = resolved.unit_price;
            line.lead_time_weeks = resolved.lead_time_weeks;
        }

        Ok(())
    }

    pub fn remove_line_item(&mut self, template_id: &TemplateId) {
        self.quote.lines.retain(|line| &line.template_id != template_id);
    }

    /// Re-derives every line against the supplied configuration. Lines whose
    /// template has left the catalog keep their last derived values.
    pub fn recompute_all(&mut self, catalog: &Catalog, configuration: &GlobalConfiguration) {
        for line in &mut self.quote.lines {
            let Some(template) = catalog.find(&line.template_id) else {
                continue;
            };
            let resolved = self.resolver.resolve(template, configuration);
            line.unit_price = resolved.unit_price;
            line.lead_time_weeks = resolved.lead_time_weeks;
        }
    }

    pub fn set_project_ref(&mut self, project_ref: Option<String>) {
        self.quote.project_ref = project_ref;
    }

    pub fn set_shipping_cost(&mut self, shipping_cost: Decimal) {
        self.quote.shipping_cost = shipping_cost;
    }

    pub fn set_assembly_charge(&mut self, assembly_charge: Decimal) {
        self.quote.assembly_charge = assembly_charge;
    }

    pub fn set_other_charges(&mut self, other_charges: Decimal) {
        self.quote.other_charges = other_charges;
    }

    pub fn set_discount_rate(&mut self, discount_rate: Decimal) {
        self.quote.discount_rate = discount_rate;
    }

    pub fn set_discount_amount(&mut self, discount_amount: Decimal) {
        self.quote.discount_amount = discount_amount;
    }

    pub fn totals(&self) -> QuoteTotals {
        compute_totals(&self.quote)
    }

    pub fn subtotal(&self) -> Decimal {
        subtotal(&self.quote)
    }

    pub fn total_discount(&self) -> Decimal {
        total_discount(&self.quote)
    }

    pub fn grand_total(&self) -> Decimal {
        grand_total(&self.quote)
    }

    pub fn max_lead_time_weeks(&self) -> u32 {
        max_lead_time_weeks(&self.quote)
    }

    pub fn total_item_count(&self) -> u32 {
        total_item_count(&self.quote)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use crate::cpq::catalog::Catalog;
    use crate::cpq::resolver::{ResolvedTemplate, TemplateResolver};
    use crate::domain::configuration::GlobalConfiguration;
    use crate::domain::quote::Quote;
    use crate::domain::template::{LeadTimeRule, ProductTemplate, TemplateId};
    use crate::errors::DomainError;

    use super::QuoteAggregator;

    fn template(id: &str, base_price: Decimal, base_weeks: u32) -> ProductTemplate {
        ProductTemplate {
            id: TemplateId::new(id),
            name: id.to_string(),
            category: "Base Cabinets".to_string(),
            base_price,
            base_lead_time_weeks: base_weeks,
            config_options: BTreeMap::from([(
                "wood_species".to_string(),
                vec!["Maple".to_string(), "Cherry".to_string()],
            )]),
            price_modifiers: BTreeMap::from([(
                "wood_species".to_string(),
                BTreeMap::from([
                    ("Maple".to_string(), Decimal::new(105, 2)),
                    ("Cherry".to_string(), Decimal::new(115, 2)),
                ]),
            )]),
            lead_time_modifiers: BTreeMap::from([(
                "wood_species".to_string(),
                LeadTimeRule::ByValue(BTreeMap::from([("Cherry".to_string(), 1)])),
            )]),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            template("prod-001", Decimal::new(30_000, 2), 4),
            template("prod-003", Decimal::new(80_000, 2), 6),
        ])
    }

    #[test]
    fn adding_the_same_template_twice_merges_into_one_line() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();
        let id = TemplateId::new("prod-001");

        aggregator.add_line_item(&catalog, &configuration, &id, 1).expect("first add");
        aggregator.add_line_item(&catalog, &configuration, &id, 2).expect("second add");

        assert_eq!(aggregator.quote().lines.len(), 1);
        assert_eq!(aggregator.quote().lines[0].quantity, 3);
    }

    #[test]
    fn new_lines_append_and_existing_lines_keep_their_position() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();

        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-001"), 1)
            .expect("add prod-001");
        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-003"), 1)
            .expect("add prod-003");
        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-001"), 1)
            .expect("re-add prod-001");

        let ids: Vec<&str> = aggregator
            .quote()
            .lines
            .iter()
            .map(|line| line.template_id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["prod-001", "prod-003"]);
    }

    #[test]
    fn adding_an_unknown_template_is_a_not_found_error() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();

        let error = aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-404"), 1)
            .expect_err("unknown template");
        assert!(matches!(error, DomainError::TemplateNotFound { .. }));
        assert!(aggregator.quote().is_empty());
    }

    #[test]
    fn set_quantity_zero_removes_the_line_from_the_subtotal() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();
        let id = TemplateId::new("prod-001");

        aggregator.add_line_item(&catalog, &configuration, &id, 2).expect("add");
        assert_eq!(aggregator.subtotal(), Decimal::new(60_000, 2));

        aggregator.set_quantity(&catalog, &configuration, &id, 0).expect("remove via zero");
        assert!(aggregator.quote().is_empty());
        assert_eq!(aggregator.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn set_quantity_on_a_missing_line_reports_not_found() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();

        let error = aggregator
            .set_quantity(&catalog, &configuration, &TemplateId::new("prod-001"), 2)
            .expect_err("no such line");
        assert!(matches!(error, DomainError::LineItemNotFound { .. }));

        let error = aggregator
            .set_quantity(&catalog, &configuration, &TemplateId::new("prod-001"), 0)
            .expect_err("no such line to remove");
        assert!(matches!(error, DomainError::LineItemNotFound { .. }));
    }

    #[test]
    fn recompute_all_tracks_the_configuration_and_is_idempotent() {
        let catalog = catalog();
        let mut configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();
        let id = TemplateId::new("prod-001");

        aggregator.add_line_item(&catalog, &configuration, &id, 2).expect("add");
        assert_eq!(aggregator.quote().lines[0].unit_price, Decimal::new(30_000, 2));

        configuration.select("wood_species", "Cherry");
        aggregator.recompute_all(&catalog, &configuration);
        // 300.00 * 1.15 = 345.00, lead time 4 + 1
        assert_eq!(aggregator.quote().lines[0].unit_price, Decimal::new(34_500, 2));
        assert_eq!(aggregator.quote().lines[0].lead_time_weeks, 5);

        let snapshot = aggregator.quote().lines.clone();
        aggregator.recompute_all(&catalog, &configuration);
        assert_eq!(aggregator.quote().lines, snapshot);
    }

    #[test]
    fn maple_selection_prices_the_worked_line_total() {
        let catalog = catalog();
        let mut configuration = GlobalConfiguration::new();
        configuration.select("wood_species", "Maple");
        let mut aggregator = QuoteAggregator::new();

        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-001"), 2)
            .expect("add");

        // 300.00 * 1.05 = 315.00 per unit, 630.00 extended
        assert_eq!(aggregator.quote().lines[0].unit_price, Decimal::new(31_500, 2));
        assert_eq!(aggregator.subtotal(), Decimal::new(63_000, 2));
    }

    #[test]
    fn worked_example_totals_from_the_portal() {
        // Lines 280.00 and 800.00, shipping 150, assembly 50, flat discount 25
        // => 1080 + 150 + 50 + 0 - 25 = 1255.00
        let catalog = Catalog::new(vec![
            template("prod-a", Decimal::new(14_000, 2), 4),
            template("prod-b", Decimal::new(80_000, 2), 6),
        ]);
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();

        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-a"), 2)
            .expect("add prod-a");
        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-b"), 1)
            .expect("add prod-b");
        aggregator.set_shipping_cost(Decimal::new(15_000, 2));
        aggregator.set_assembly_charge(Decimal::new(5_000, 2));
        aggregator.set_discount_amount(Decimal::new(2_500, 2));

        let totals = aggregator.totals();
        assert_eq!(totals.subtotal, Decimal::new(108_000, 2));
        assert_eq!(totals.total_discount, Decimal::new(2_500, 2));
        assert_eq!(totals.grand_total, Decimal::new(125_500, 2));
        assert_eq!(totals.total_item_count, 3);
        assert_eq!(totals.max_lead_time_weeks, 6);
    }

    #[test]
    fn rate_discount_on_the_worked_subtotal() {
        // 10% of 1080.00 = 108.00
        let mut quote = Quote::new();
        let catalog = Catalog::new(vec![template("prod-a", Decimal::new(108_000, 2), 4)]);
        quote.discount_rate = Decimal::new(10, 0);
        let mut aggregator = QuoteAggregator::from_quote(quote);
        aggregator
            .add_line_item(&catalog, &GlobalConfiguration::new(), &TemplateId::new("prod-a"), 1)
            .expect("add");

        assert_eq!(aggregator.total_discount(), Decimal::new(10_800, 2));
    }

    #[test]
    fn rate_and_amount_discounts_are_additive() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();
        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-003"), 1)
            .expect("add");
        aggregator.set_discount_rate(Decimal::new(10, 0));
        aggregator.set_discount_amount(Decimal::new(2_500, 2));

        // 800.00 * 10% + 25.00 = 105.00
        assert_eq!(aggregator.total_discount(), Decimal::new(10_500, 2));
    }

    #[test]
    fn raising_either_discount_strictly_lowers_the_grand_total() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();
        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-003"), 1)
            .expect("add");

        let baseline = aggregator.grand_total();
        aggregator.set_discount_rate(Decimal::new(5, 0));
        let with_rate = aggregator.grand_total();
        aggregator.set_discount_amount(Decimal::new(1_000, 2));
        let with_both = aggregator.grand_total();

        assert!(with_rate < baseline);
        assert!(with_both < with_rate);
    }

    #[test]
    fn grand_total_goes_negative_when_discount_exceeds_everything_else() {
        let catalog = catalog();
        let configuration = GlobalConfiguration::new();
        let mut aggregator = QuoteAggregator::new();
        aggregator
            .add_line_item(&catalog, &configuration, &TemplateId::new("prod-001"), 1)
            .expect("add");
        aggregator.set_discount_amount(Decimal::new(100_000, 2));

        // 300.00 - 1000.00; no clamping.
        assert_eq!(aggregator.grand_total(), Decimal::new(-70_000, 2));
    }

    #[test]
    fn empty_quote_reports_zero_totals_and_lead_time() {
        let aggregator = QuoteAggregator::new();
        let totals = aggregator.totals();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
        assert_eq!(totals.max_lead_time_weeks, 0);
        assert_eq!(totals.total_item_count, 0);
    }

    #[test]
    fn aggregator_accepts_a_stub_resolver_through_the_trait_seam() {
        struct FlatResolver;

        impl TemplateResolver for FlatResolver {
            fn resolve(
                &self,
                _template: &ProductTemplate,
                _configuration: &GlobalConfiguration,
            ) -> ResolvedTemplate {
                ResolvedTemplate { unit_price: Decimal::new(100, 2), lead_time_weeks: 1 }
            }
        }

        let catalog = catalog();
        let mut aggregator = QuoteAggregator::with_resolver(FlatResolver, Quote::new());
        aggregator
            .add_line_item(
                &catalog,
                &GlobalConfiguration::new(),
                &TemplateId::new("prod-003"),
                3,
            )
            .expect("add");

        assert_eq!(aggregator.subtotal(), Decimal::new(300, 2));
        assert_eq!(aggregator.max_lead_time_weeks(), 1);
    }
}

pub mod aggregator;
pub mod catalog;
pub mod resolver;

pub use aggregator::{
    compute_totals, grand_total, max_lead_time_weeks, subtotal, total_discount, total_item_count,
    QuoteAggregator, QuoteTotals,
};
pub use catalog::Catalog;
pub use resolver::{
    resolve_lead_time, resolve_template, resolve_unit_price, DeterministicTemplateResolver,
    ResolvedTemplate, TemplateResolver,
};

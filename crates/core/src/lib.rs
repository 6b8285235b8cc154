pub mod config;
pub mod cpq;
pub mod demo;
pub mod domain;
pub mod errors;

pub use config::{load_catalog, CatalogConfigError, LoadOptions};
pub use cpq::aggregator::{
    compute_totals, grand_total, max_lead_time_weeks, subtotal, total_discount, total_item_count,
    QuoteAggregator, QuoteTotals,
};
pub use cpq::catalog::Catalog;
pub use cpq::resolver::{
    resolve_lead_time, resolve_template, resolve_unit_price, DeterministicTemplateResolver,
    ResolvedTemplate, TemplateResolver,
};
pub use domain::configuration::GlobalConfiguration;
pub use domain::project::ProjectDetails;
pub use domain::quotation::{
    QuotationBook, QuotationId, QuotationRecord, QuotationStatus,
};
pub use domain::quote::{LineItem, Quote, QuoteId};
pub use domain::template::{LeadTimeRule, ProductTemplate, TemplateId};
pub use errors::DomainError;

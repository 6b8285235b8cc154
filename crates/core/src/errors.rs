use thiserror::Error;

use crate::domain::quotation::{QuotationId, QuotationStatus};
use crate::domain::template::TemplateId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("template `{template_id:?}` is not in the catalog")]
    TemplateNotFound { template_id: TemplateId },
    #[error("quote has no line item for template `{template_id:?}`")]
    LineItemNotFound { template_id: TemplateId },
    #[error("quotation `{quotation_id:?}` is not in the book")]
    QuotationNotFound { quotation_id: QuotationId },
    #[error("invalid quotation transition from {from:?} to {to:?}")]
    InvalidQuotationTransition { from: QuotationStatus, to: QuotationStatus },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    /// Message safe to surface to a dealer without leaking internals.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TemplateNotFound { .. } => "That product is not in the current catalog.",
            Self::LineItemNotFound { .. } => "That product is not in the quotation.",
            Self::QuotationNotFound { .. } => "That quotation could not be found.",
            Self::InvalidQuotationTransition { .. } => {
                "The quotation cannot move to that status from its current one."
            }
            Self::InvariantViolation(_) => "The request could not be processed.",
        }
    }
}

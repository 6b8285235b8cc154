use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::project::ProjectDetails;
use crate::domain::quote::{Quote, QuoteId};
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotationId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationStatus {
    Draft,
    PendingReview,
    Approved,
    Ordered,
}

impl QuotationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "Pending Review",
            Self::Approved => "Approved",
            Self::Ordered => "Ordered",
        }
    }
}

/// A submitted quotation as the dealer sees it in the quotations register:
/// the project it belongs to, its lifecycle status, and the grand total
/// captured at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationRecord {
    pub id: QuotationId,
    pub quote_id: QuoteId,
    pub project_name: String,
    pub draft_date: NaiveDate,
    pub approval_date: Option<NaiveDate>,
    pub value: Decimal,
    pub status: QuotationStatus,
}

impl QuotationRecord {
    pub fn can_transition_to(&self, next: QuotationStatus) -> bool {
        matches!(
            (self.status, next),
            (QuotationStatus::Draft, QuotationStatus::PendingReview)
                | (QuotationStatus::Draft, QuotationStatus::Approved)
                | (QuotationStatus::PendingReview, QuotationStatus::Approved)
                | (QuotationStatus::Approved, QuotationStatus::Ordered)
        )
    }

    pub fn transition_to(
        &mut self,
        next: QuotationStatus,
        on_date: NaiveDate,
    ) -> Result<(), DomainError> {
        if !self.can_transition_to(next) {
            return Err(DomainError::InvalidQuotationTransition { from: self.status, to: next });
        }

        if next == QuotationStatus::Approved {
            self.approval_date = Some(on_date);
        }
        self.status = next;
        Ok(())
    }
}

/// In-memory register of submitted quotations, ordered by submission.
/// Persistence and multi-user coordination belong to an outer system; this
/// register only owns ids, records, and status transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationBook {
    records: Vec<QuotationRecord>,
}

impl QuotationBook {
    pub fn new(records: Vec<QuotationRecord>) -> Self {
        Self { records }
    }

    /// Converts a finished quote into a draft quotation record. The grand
    /// total is captured by the caller so the book never recomputes pricing.
    pub fn submit(
        &mut self,
        quote: &Quote,
        project: &ProjectDetails,
        grand_total: Decimal,
        draft_date: NaiveDate,
    ) -> QuotationId {
        let id = self.next_id(draft_date);
        self.records.push(QuotationRecord {
            id: id.clone(),
            quote_id: quote.id.clone(),
            project_name: project.project_name.clone(),
            draft_date,
            approval_date: None,
            value: grand_total,
            status: QuotationStatus::Draft,
        });
        id
    }

    pub fn find(&self, id: &QuotationId) -> Option<&QuotationRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn list(&self) -> &[QuotationRecord] {
        &self.records
    }

    pub fn transition(
        &mut self,
        id: &QuotationId,
        next: QuotationStatus,
        on_date: NaiveDate,
    ) -> Result<(), DomainError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| DomainError::QuotationNotFound { quotation_id: id.clone() })?;
        record.transition_to(next, on_date)
    }

    fn next_id(&self, draft_date: NaiveDate) -> QuotationId {
        use chrono::Datelike;

        let year = draft_date.year();
        let prefix = format!("Q-{year}-");
        let max_seq = self
            .records
            .iter()
            .filter_map(|record| record.id.0.strip_prefix(&prefix))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        QuotationId(format!("{prefix}{:03}", max_seq + 1))
    }
}

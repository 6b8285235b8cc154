use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project context a quotation is drafted against. The quoting core accepts
/// these fields opaquely; nothing here is validated beyond being carried
/// through to the quotation record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub project_name: String,
    pub contact_person: String,
    pub expected_delivery_date: Option<NaiveDate>,
    pub delivery_address: String,
    pub postal_code: String,
    pub delivery_notes: String,
}

impl ProjectDetails {
    pub fn named(project_name: impl Into<String>) -> Self {
        Self { project_name: project_name.into(), ..Self::default() }
    }
}

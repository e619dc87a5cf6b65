//! Contact-form submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult};

/// Plain field values from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// A submitted contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(flatten)]
    pub details: ContactDetails,
    pub submitted_at: DateTime<Utc>,
}

/// Receives contact messages.
pub trait ContactSink {
    fn record_contact(&mut self, contact: &ContactRecord);
}

impl ContactSink for Vec<ContactRecord> {
    fn record_contact(&mut self, contact: &ContactRecord) {
        self.push(contact.clone());
    }
}

/// Validate and forward a contact message. Name and message are required.
pub fn submit_contact(
    details: ContactDetails,
    submitted_at: DateTime<Utc>,
    sink: &mut dyn ContactSink,
) -> DomainResult<ContactRecord> {
    if details.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if details.message.trim().is_empty() {
        return Err(DomainError::validation("message cannot be empty"));
    }

    let record = ContactRecord {
        details,
        submitted_at,
    };
    sink.record_contact(&record);

    tracing::info!(subject = %record.details.subject, "contact message submitted");

    Ok(record)
}

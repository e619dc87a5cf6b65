//! Tracing-backed sink for submitted records.

use crate::contact::{ContactRecord, ContactSink};
use crate::order::{OrderRecord, OrderSink};

/// Logs every submitted order and contact message at `info`.
///
/// This is the storefront's default handler: records are not sent anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OrderSink for LogSink {
    fn record_order(&mut self, order: &OrderRecord) {
        tracing::info!(
            reference = %order.reference,
            customer = %order.customer.name,
            phone = %order.customer.phone,
            lines = order.lines.len(),
            total = %order.total,
            placed_at = %order.placed_at_iso(),
            "order received"
        );
    }
}

impl ContactSink for LogSink {
    fn record_contact(&mut self, contact: &ContactRecord) {
        tracing::info!(
            name = %contact.details.name,
            email = %contact.details.email,
            subject = %contact.details.subject,
            submitted_at = %contact.submitted_at.to_rfc3339(),
            "contact message received"
        );
    }
}

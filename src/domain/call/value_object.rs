//! Call value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of AI call being placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallKind {
    /// First outreach to a prospect
    ColdCall,
    /// Chasing an overdue invoice
    PaymentReminder,
    /// Following up on a sent quotation
    QuoteFollowUp,
}

impl CallKind {
    pub fn as_str(&self) -> &str {
        match self {
            CallKind::ColdCall => "coldCall",
            CallKind::PaymentReminder => "paymentReminder",
            CallKind::QuoteFollowUp => "quoteFollowUp",
        }
    }
}

impl Default for CallKind {
    fn default() -> Self {
        CallKind::ColdCall
    }
}

/// Display colors assigned to calls, cycled by creation order
pub const CALL_COLOR_PALETTE: [&str; 5] = [
    "#4f46e5", // indigo
    "#059669", // emerald
    "#d97706", // amber
    "#dc2626", // red
    "#0891b2", // cyan
];

/// Color for the call occupying the given creation slot
pub fn palette_color(slot: usize) -> &'static str {
    CALL_COLOR_PALETTE[slot % CALL_COLOR_PALETTE.len()]
}

/// Invoice context attached to a payment-reminder call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    /// Invoice number as shown to the customer
    pub number: String,
    /// Outstanding amount
    pub amount_due: f64,
    /// Currency code (e.g. "EUR")
    pub currency: String,
    /// Payment due date
    pub due_date: Option<NaiveDate>,
}

/// Quotation context attached to a quote-follow-up call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationSnapshot {
    /// Quotation number as shown to the customer
    pub number: String,
    /// Quoted total
    pub total_amount: f64,
    /// Currency code (e.g. "EUR")
    pub currency: String,
    /// Last day the quotation is valid
    pub valid_until: Option<NaiveDate>,
}

//! Active call entity

use crate::domain::call::value_object::{CallKind, InvoiceSnapshot, QuotationSnapshot};
use crate::domain::contact::Contact;
use crate::domain::shared::value_objects::CallId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a caller surface supplies when placing a call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSetup {
    /// Target contact
    pub contact: Contact,
    /// Voice label chosen in the caller UI, opaque here
    pub voice: String,
    /// Product identifiers to pitch, in pitch order
    pub products: Vec<String>,
    /// Free-text steering for the AI agent
    pub instructions: String,
    /// Kind of call being placed
    pub kind: CallKind,
    /// Invoice context for payment reminders
    pub invoice: Option<InvoiceSnapshot>,
    /// Quotation context for quote follow-ups
    pub quotation: Option<QuotationSnapshot>,
}

impl CallSetup {
    pub fn new(contact: Contact, voice: impl Into<String>) -> Self {
        Self {
            contact,
            voice: voice.into(),
            products: Vec::new(),
            instructions: String::new(),
            kind: CallKind::ColdCall,
            invoice: None,
            quotation: None,
        }
    }

    pub fn with_products(mut self, products: Vec<String>) -> Self {
        self.products = products;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn of_kind(mut self, kind: CallKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_invoice(mut self, invoice: InvoiceSnapshot) -> Self {
        self.invoice = Some(invoice);
        self
    }

    pub fn with_quotation(mut self, quotation: QuotationSnapshot) -> Self {
        self.quotation = Some(quotation);
        self
    }
}

/// A live AI call session
///
/// Created only by the registry; all mutation goes through registry
/// operations so the focus and visibility invariants hold centrally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveCall {
    pub id: CallId,
    pub contact: Contact,
    pub voice: String,
    pub products: Vec<String>,
    pub instructions: String,
    pub kind: CallKind,
    pub invoice: Option<InvoiceSnapshot>,
    pub quotation: Option<QuotationSnapshot>,
    /// Shown in the minimized strip instead of the foreground modal
    pub minimized: bool,
    /// Elapsed seconds, recomputed from `started_at`
    pub duration_seconds: u64,
    /// Captured once at creation; duration is always derived from it
    pub started_at: DateTime<Utc>,
    /// Display color from the fixed palette
    pub color: String,
}

impl ActiveCall {
    pub fn new(setup: CallSetup, color: &str) -> Self {
        Self {
            id: CallId::new(),
            contact: setup.contact,
            voice: setup.voice,
            products: setup.products,
            instructions: setup.instructions,
            kind: setup.kind,
            invoice: setup.invoice,
            quotation: setup.quotation,
            minimized: false,
            duration_seconds: 0,
            started_at: Utc::now(),
            color: color.to_string(),
        }
    }

    /// Recompute elapsed duration from the start timestamp
    ///
    /// Always derived, never accumulated.
    pub fn refresh_duration(&mut self) -> u64 {
        self.duration_seconds = (Utc::now() - self.started_at).num_seconds().max(0) as u64;
        self.duration_seconds
    }

    /// Send the call to the minimized strip
    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    /// Bring the call back to the foreground
    pub fn restore(&mut self) {
        self.minimized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ContactId;

    fn setup() -> CallSetup {
        CallSetup::new(Contact::new(ContactId::new("1"), "Let Cruz"), "Sarah (Sales)")
            .with_products(vec!["prod-1".to_string(), "prod-2".to_string()])
            .with_instructions("Mention the spring discount")
    }

    #[test]
    fn test_new_call_starts_foregrounded() {
        let call = ActiveCall::new(setup(), "#4f46e5");

        assert!(!call.minimized);
        assert_eq!(call.duration_seconds, 0);
        assert_eq!(call.kind, CallKind::ColdCall);
        assert_eq!(call.color, "#4f46e5");
        assert_eq!(call.products, vec!["prod-1", "prod-2"]);
    }

    #[test]
    fn test_minimize_restore_toggle() {
        let mut call = ActiveCall::new(setup(), "#4f46e5");

        call.minimize();
        assert!(call.minimized);

        call.restore();
        assert!(!call.minimized);
    }

    #[test]
    fn test_refresh_duration_is_derived() {
        let mut call = ActiveCall::new(setup(), "#4f46e5");
        call.duration_seconds = 999;

        // Recomputation overwrites any stale value
        assert_eq!(call.refresh_duration(), 0);
    }
}

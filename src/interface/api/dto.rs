//! API request/response shapes

use crate::domain::call::entity::{ActiveCall, CallSetup};
use crate::domain::call::value_object::{CallKind, InvoiceSnapshot, QuotationSnapshot};
use crate::domain::contact::Contact;
use crate::domain::shared::value_objects::{CallId, ContactId};
use serde::{Deserialize, Serialize};

/// Uniform response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Contact payload as the CRM front-end sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
}

impl From<ContactDto> for Contact {
    fn from(dto: ContactDto) -> Self {
        let mut contact = Contact::new(ContactId::new(dto.id), dto.name);
        if let Some(title) = dto.title {
            contact = contact.with_title(title);
        }
        if let Some(company) = dto.company {
            contact = contact.with_company(company);
        }
        contact
    }
}

/// Body of `POST /calls`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCallRequest {
    pub contact: ContactDto,
    pub voice: String,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub call_type: CallKind,
    pub invoice: Option<InvoiceSnapshot>,
    pub quotation: Option<QuotationSnapshot>,
}

impl StartCallRequest {
    pub fn into_setup(self) -> CallSetup {
        let mut setup = CallSetup::new(self.contact.into(), self.voice)
            .with_products(self.products)
            .with_instructions(self.instructions)
            .of_kind(self.call_type);
        if let Some(invoice) = self.invoice {
            setup = setup.with_invoice(invoice);
        }
        if let Some(quotation) = self.quotation {
            setup = setup.with_quotation(quotation);
        }
        setup
    }
}

/// Body of `POST /calls/:id/duration`
#[derive(Debug, Serialize, Deserialize)]
pub struct DurationOverrideRequest {
    pub seconds: u64,
}

/// Snapshot of all live calls plus the focus pointer
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub calls: Vec<ActiveCall>,
    pub focused_call_id: Option<CallId>,
    pub total: usize,
}

/// Outcome of a minimize/restore/duration/end operation
///
/// `updated` is false when the id no longer referenced a live call; the
/// registry treats that as a no-op rather than an error.
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationResponse {
    pub call_id: CallId,
    pub updated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_call_request_wire_shape() {
        let body = r#"{
            "contact": {"id": "1", "name": "Let Cruz", "company": "Cruz Logistics"},
            "voice": "Sarah (Sales)",
            "products": ["prod-1"],
            "instructions": "Mention the spring discount",
            "callType": "paymentReminder",
            "invoice": {"number": "INV-1042", "amount_due": 1250.0, "currency": "EUR", "due_date": "2025-06-30"}
        }"#;

        let request: StartCallRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.call_type, CallKind::PaymentReminder);

        let setup = request.into_setup();
        assert_eq!(setup.contact.id().as_str(), "1");
        assert_eq!(setup.contact.company(), Some("Cruz Logistics"));
        assert_eq!(setup.invoice.unwrap().number, "INV-1042");
        assert!(setup.quotation.is_none());
    }

    #[test]
    fn test_start_call_request_defaults() {
        let body = r#"{
            "contact": {"id": "2", "name": "Dana Wolf"},
            "voice": "Sarah (Sales)"
        }"#;

        let request: StartCallRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.call_type, CallKind::ColdCall);
        assert!(request.products.is_empty());
        assert!(request.instructions.is_empty());
    }
}

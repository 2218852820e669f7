//! Contact reference data
//!
//! Contacts are owned by the CRM; this service treats them as immutable
//! reference data attached to a call at creation time.

use crate::domain::shared::value_objects::ContactId;
use serde::{Deserialize, Serialize};

/// A CRM contact targeted by a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// CRM identifier
    id: ContactId,
    /// Display name
    name: String,
    /// Job title
    title: Option<String>,
    /// Company name
    company: Option<String>,
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            company: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

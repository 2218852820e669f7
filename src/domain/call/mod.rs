//! Call bounded context - the live AI call session and its events

pub mod entity;
pub mod event;
pub mod value_object;

pub use entity::{ActiveCall, CallSetup};
pub use event::CallSessionEvent;
pub use value_object::{
    palette_color, CallKind, InvoiceSnapshot, QuotationSnapshot, CALL_COLOR_PALETTE,
};

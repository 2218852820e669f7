//! Interface layer - Inbound adapters for collaborators

pub mod api;

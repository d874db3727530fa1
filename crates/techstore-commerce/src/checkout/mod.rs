//! Checkout module.
//!
//! Contains the order summary snapshot and the messaging hand-off link.

mod summary;
mod whatsapp;

pub use summary::{OrderSummary, SummaryLine};
pub use whatsapp::{whatsapp_url, DEMO_CONTACT};

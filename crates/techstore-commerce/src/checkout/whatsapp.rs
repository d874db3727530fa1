//! WhatsApp hand-off link.

use crate::checkout::OrderSummary;

/// Demo contact number used when no number is configured.
pub const DEMO_CONTACT: &str = "1234567890";

/// Build a `wa.me` link that opens a chat with the given number and the
/// message prefilled. The message is percent-encoded; the phone number is
/// expected in international format without `+` or separators.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

impl OrderSummary {
    /// Render this summary as a prefilled WhatsApp checkout link.
    pub fn whatsapp_url(&self, phone: &str) -> String {
        whatsapp_url(phone, &self.render_message())
    }
}

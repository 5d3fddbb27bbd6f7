//! Mail delivery configuration

use serde::Deserialize;

/// Default EmailJS REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Configuration for the mail delivery service.
///
/// All three ids are required for delivery to work; an empty `service_id`
/// means mail is unconfigured and submissions fail with a clear message
/// instead of a confusing HTTP error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Override for tests or self-hosted relays.
    pub endpoint: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl MailConfig {
    /// True when every id needed for delivery is present.
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

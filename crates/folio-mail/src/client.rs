//! EmailJS-style send client

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use folio_core::prelude::*;
use folio_core::ContactMessage;

use crate::config::MailConfig;

/// Anything that can deliver a contact message.
///
/// The TEA loop holds an `Arc<dyn MailSender>`; production uses
/// [`MailClient`], tests substitute an in-memory fake.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

/// Wire format of the send request.
///
/// EmailJS expects the four form fields nested under `template_params`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// HTTP client for the transactional-email endpoint.
pub struct MailClient {
    config: MailConfig,
    http: reqwest::Client,
}

impl MailClient {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn request_body<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        }
    }
}

#[async_trait]
impl MailSender for MailClient {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        if !self.config.is_configured() {
            return Err(Error::mail_delivery(
                "mail delivery is not configured (set [mail] in config.toml)",
            ));
        }

        debug!(endpoint = %self.config.endpoint, "sending contact message");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&self.request_body(message))
            .send()
            .await
            .map_err(|e| Error::mail_delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "mail endpoint rejected the message");
            return Err(Error::mail_delivery(format!(
                "service responded with {status}"
            )));
        }

        debug!("contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice portfolio.".into(),
        }
    }

    fn configured_client() -> MailClient {
        MailClient::new(MailConfig {
            service_id: "service_abc".into(),
            template_id: "template_def".into(),
            public_key: "pk_ghi".into(),
            ..MailConfig::default()
        })
    }

    #[test]
    fn test_request_body_matches_wire_contract() {
        let client = configured_client();
        let message = sample_message();
        let value = serde_json::to_value(client.request_body(&message)).unwrap();

        assert_eq!(value["service_id"], "service_abc");
        assert_eq!(value["template_id"], "template_def");
        assert_eq!(value["user_id"], "pk_ghi");
        assert_eq!(value["template_params"]["name"], "Ada");
        assert_eq!(value["template_params"]["email"], "ada@example.com");
        assert_eq!(value["template_params"]["subject"], "Hello");
        assert_eq!(value["template_params"]["message"], "Nice portfolio.");
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_before_any_io() {
        let client = MailClient::new(MailConfig::default());
        let err = client.send(&sample_message()).await.unwrap_err();
        assert!(matches!(err, Error::MailDelivery { .. }));
        assert!(err.to_string().contains("not configured"));
    }
}

use anyhow::Context;
use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

/// Outbound transactional-email seam. Returns the provider-assigned
/// message id on success.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, from: &str, to: &str, subject: &str, html: &str)
        -> anyhow::Result<String>;
}

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    pub fn from_env() -> Self {
        let api_key = std::env::var("RESEND_API_KEY")
            .expect("RESEND_API_KEY must be set");
        Self {
            client: Resend::new(&api_key),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, from: &str, to: &str, subject: &str, html: &str)
        -> anyhow::Result<String>
    {
        let email = CreateEmailBaseOptions::new(from, [to], subject).with_html(html);
        let sent = self
            .client
            .emails
            .send(email)
            .await
            .context("resend API call failed")?;
        Ok(sent.id.to_string())
    }
}

use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Logs instead of delivering. Real email integration is handled outside
/// this service; operators follow the structured log stream.
pub struct EmailLogNotifier {
    recipient: String,
}

impl EmailLogNotifier {
    pub fn new(recipient: String) -> Self {
        Self { recipient }
    }
}

#[async_trait]
impl Notifier for EmailLogNotifier {
    async fn send(&self, subject: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(to = %self.recipient, subject = %subject, body = %body, "email notification (log only)");
        Ok(())
    }
}

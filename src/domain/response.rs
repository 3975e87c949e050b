use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Message object returned by MessageBird after a successful create.
pub struct MessageAck {
    pub id: String,
    pub href: Option<String>,
    pub originator: Option<String>,
    pub body: Option<String>,
    pub created_datetime: Option<String>,
    pub recipients: RecipientSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientSummary {
    pub total_count: u32,
    pub total_sent_count: u32,
    pub items: Vec<RecipientStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientStatus {
    pub recipient: String,
    pub status: Option<String>,
}

impl fmt::Display for MessageAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message {} accepted for {}/{} recipient(s)",
            self.id, self.recipients.total_sent_count, self.recipients.total_count
        )?;
        for item in &self.recipients.items {
            match item.status.as_deref() {
                Some(status) => write!(f, "; {} {}", item.recipient, status)?,
                None => write!(f, "; {}", item.recipient)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of MessageBird's `errors` array.
pub struct ApiErrorDetail {
    pub code: i32,
    pub description: String,
    pub parameter: Option<String>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error code {}: {}", self.code, self.description)
    }
}

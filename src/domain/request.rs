use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageBody, Originator, Recipient};

/// Upper bound on recipients accepted by a single `POST /messages`.
pub const CREATE_MESSAGE_MAX_RECIPIENTS: usize = 50;

#[derive(Debug, Clone)]
pub struct CreateMessage {
    originator: Originator,
    recipients: Vec<Recipient>,
    body: MessageBody,
}

impl CreateMessage {
    pub fn new(
        originator: Originator,
        recipients: Vec<Recipient>,
        body: MessageBody,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        if recipients.len() > CREATE_MESSAGE_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: CREATE_MESSAGE_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            originator,
            recipients,
            body,
        })
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }
}

//! Messaging adapter: the one operation the form handler needs from an SMS provider.

use std::future::Future;
use std::pin::Pin;

use crate::client::{MessageBirdClient, MessageBirdError};
use crate::domain::{ApiErrorDetail, CreateMessage, MessageAck, MessageBody, Originator, Recipient};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Why a message could not be sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The provider answered with one or more coded errors.
    #[error("{}", join_lines(.0))]
    Rejected(Vec<ApiErrorDetail>),

    /// The provider could not be reached or its answer could not be read.
    #[error("{0}")]
    Failed(String),
}

impl SendError {
    /// Multi-line summary shown on the form, one `Error code {code}: {description}` per line.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

fn join_lines(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<MessageBirdError> for SendError {
    fn from(err: MessageBirdError) -> Self {
        match err {
            MessageBirdError::Api { errors } => Self::Rejected(errors),
            other => Self::Failed(other.to_string()),
        }
    }
}

/// Sends a text message from an originator to a list of recipients.
///
/// Implementations must report provider-level failures through [`SendError`], never by panicking.
pub trait Messenger: Send + Sync {
    fn send<'a>(
        &'a self,
        originator: &'a Originator,
        recipients: Vec<Recipient>,
        body: MessageBody,
    ) -> BoxFuture<'a, Result<MessageAck, SendError>>;
}

impl Messenger for MessageBirdClient {
    fn send<'a>(
        &'a self,
        originator: &'a Originator,
        recipients: Vec<Recipient>,
        body: MessageBody,
    ) -> BoxFuture<'a, Result<MessageAck, SendError>> {
        Box::pin(async move {
            let request = CreateMessage::new(originator.clone(), recipients, body)
                .map_err(MessageBirdError::from)?;
            Ok(self.create_message(request).await?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(code: i32, description: &str) -> ApiErrorDetail {
        ApiErrorDetail {
            code,
            description: description.to_owned(),
            parameter: None,
        }
    }

    #[test]
    fn rejected_summary_formats_single_error() {
        let err = SendError::Rejected(vec![detail(2, "Request not allowed")]);
        assert_eq!(err.summary(), "Error code 2: Request not allowed");
    }

    #[test]
    fn rejected_summary_joins_errors_with_newlines() {
        let err = SendError::Rejected(vec![
            detail(2, "Request not allowed"),
            detail(9, "no (correct) recipients found"),
        ]);
        assert_eq!(
            err.summary(),
            "Error code 2: Request not allowed\nError code 9: no (correct) recipients found"
        );
    }

    #[test]
    fn api_errors_keep_their_pairs() {
        let err: SendError = MessageBirdError::Api {
            errors: vec![detail(25, "Not enough balance")],
        }
        .into();
        assert_eq!(err, SendError::Rejected(vec![detail(25, "Not enough balance")]));
    }

    #[test]
    fn other_client_errors_become_failed() {
        let err: SendError = MessageBirdError::HttpStatus {
            status: 502,
            body: None,
        }
        .into();
        assert_eq!(err, SendError::Failed("unexpected HTTP status: 502".to_owned()));
        assert_eq!(err.summary(), "unexpected HTTP status: 502");
    }
}

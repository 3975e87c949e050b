use serde::Deserialize;

use crate::domain::{
    ApiErrorDetail, CreateMessage, MessageAck, MessageBody, Originator, Recipient,
    RecipientStatus, RecipientSummary,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing the message id")]
    MissingMessageId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJsonResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    originator: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    created_datetime: Option<String>,
    #[serde(default)]
    recipients: Option<RecipientsJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientsJson {
    #[serde(default)]
    total_count: u32,
    #[serde(default)]
    total_sent_count: u32,
    #[serde(default)]
    items: Vec<RecipientItemJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct RecipientItemJson {
    recipient: TransportMsisdn,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportMsisdn {
    Number(serde_json::Number),
    String(String),
}

impl TransportMsisdn {
    fn into_string(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::String(value) => value,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorsJsonResponse {
    errors: Vec<ErrorJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJson {
    code: i32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameter: Option<String>,
}

pub fn encode_create_message_form(request: &CreateMessage) -> Vec<(String, String)> {
    let recipients = request
        .recipients()
        .iter()
        .map(Recipient::raw)
        .collect::<Vec<_>>()
        .join(",");

    vec![
        (
            Originator::FIELD.to_owned(),
            request.originator().as_str().to_owned(),
        ),
        (Recipient::FIELD.to_owned(), recipients),
        (
            MessageBody::FIELD.to_owned(),
            request.body().as_str().to_owned(),
        ),
    ]
}

pub fn decode_message_json_response(json: &str) -> Result<MessageAck, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;
    let id = parsed
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or(TransportError::MissingMessageId)?;

    let recipients = parsed
        .recipients
        .map(|recipients| RecipientSummary {
            total_count: recipients.total_count,
            total_sent_count: recipients.total_sent_count,
            items: recipients
                .items
                .into_iter()
                .map(|item| RecipientStatus {
                    recipient: item.recipient.into_string(),
                    status: item.status,
                })
                .collect(),
        })
        .unwrap_or_default();

    Ok(MessageAck {
        id,
        href: parsed.href,
        originator: parsed.originator,
        body: parsed.body,
        created_datetime: parsed.created_datetime,
        recipients,
    })
}

/// Extract the `errors` array, if the body carries one.
///
/// Returns `None` for bodies that are not JSON or have no (or an empty) `errors` field.
pub fn decode_errors_json_response(json: &str) -> Option<Vec<ApiErrorDetail>> {
    let parsed: ErrorsJsonResponse = serde_json::from_str(json).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }

    Some(
        parsed
            .errors
            .into_iter()
            .map(|error| ApiErrorDetail {
                code: error.code,
                description: error.description,
                parameter: error.parameter,
            })
            .collect(),
    )
}

//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{CREATE_MESSAGE_MAX_RECIPIENTS, CreateMessage};
pub use response::{ApiErrorDetail, MessageAck, RecipientStatus, RecipientSummary};
pub use validation::ValidationError;
pub use value::{AccessKey, MessageBody, Originator, Recipient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_key_rejects_empty_and_trims() {
        assert!(matches!(
            AccessKey::new("   "),
            Err(ValidationError::Empty {
                field: AccessKey::FIELD
            })
        ));
        assert_eq!(AccessKey::new(" live_abc ").unwrap().as_str(), "live_abc");
    }

    #[test]
    fn access_key_debug_is_redacted() {
        let key = AccessKey::new("live_secret").unwrap();
        assert_eq!(format!("{key:?}"), "AccessKey(***)");
    }

    #[test]
    fn originator_accepts_alphanumeric_and_numeric_senders() {
        assert_eq!(Originator::new("MessageBird").unwrap().as_str(), "MessageBird");
        assert_eq!(Originator::new("+31612345678").unwrap().as_str(), "+31612345678");
        assert_eq!(Originator::new(" Sales ").unwrap().as_str(), "Sales");
    }

    #[test]
    fn originator_length_limits_are_enforced() {
        assert!(matches!(
            Originator::new("TwelveChars1"),
            Err(ValidationError::InvalidOriginator { .. })
        ));
        assert!(Originator::new("12345678901234567").is_ok());
        assert!(Originator::new("123456789012345678").is_err());
        assert!(Originator::new("+Sales").is_err());
        assert!(Originator::new("Sales-Team").is_err());
        assert!(matches!(
            Originator::new(""),
            Err(ValidationError::Empty {
                field: Originator::FIELD
            })
        ));
    }

    #[test]
    fn message_body_preserves_whitespace() {
        let body = MessageBody::new("  hi  ").unwrap();
        assert_eq!(body.as_str(), "  hi  ");
        assert!(MessageBody::new(" \n ").is_err());
    }

    #[test]
    fn create_message_requires_recipients() {
        let err = CreateMessage::new(
            Originator::new("Sales").unwrap(),
            Vec::new(),
            MessageBody::new("hi").unwrap(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: Recipient::FIELD
            }
        ));
    }

    #[test]
    fn create_message_recipient_limit_is_enforced() {
        let recipient = Recipient::new("31612345678").unwrap();
        let err = CreateMessage::new(
            Originator::new("Sales").unwrap(),
            vec![recipient; CREATE_MESSAGE_MAX_RECIPIENTS + 1],
            MessageBody::new("hi").unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { .. }));
    }

    #[test]
    fn api_error_detail_display_matches_form_summary() {
        let detail = ApiErrorDetail {
            code: 2,
            description: "Request not allowed".to_owned(),
            parameter: None,
        };
        assert_eq!(detail.to_string(), "Error code 2: Request not allowed");
    }

    #[test]
    fn message_ack_display_lists_recipients() {
        let ack = MessageAck {
            id: "e8077d803532c0b5937c639b60216938".to_owned(),
            href: None,
            originator: Some("Sales".to_owned()),
            body: Some("hi".to_owned()),
            created_datetime: None,
            recipients: RecipientSummary {
                total_count: 1,
                total_sent_count: 1,
                items: vec![RecipientStatus {
                    recipient: "31612345678".to_owned(),
                    status: Some("sent".to_owned()),
                }],
            },
        };
        assert_eq!(
            ack.to_string(),
            "message e8077d803532c0b5937c639b60216938 accepted for 1/1 recipient(s); 31612345678 sent"
        );
    }
}

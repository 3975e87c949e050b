use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// MessageBird access key, sent as `Authorization: AccessKey <key>`.
///
/// Invariant: non-empty after trimming.
pub struct AccessKey(String);

impl AccessKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "access_key";

    /// Create a validated [`AccessKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender shown on the handset (`originator`).
///
/// Invariant: either a numeric sender (optional leading `+`, at most 17 digits)
/// or an alphanumeric sender of at most 11 characters.
pub struct Originator(String);

impl Originator {
    /// Form field name used by MessageBird (`originator`).
    pub const FIELD: &'static str = "originator";

    /// Longest alphanumeric sender accepted by operators.
    pub const MAX_ALPHANUMERIC_LEN: usize = 11;
    /// Longest numeric sender.
    pub const MAX_NUMERIC_LEN: usize = 17;

    /// Create a validated [`Originator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let numeric = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
        let valid = if numeric {
            digits.len() <= Self::MAX_NUMERIC_LEN
        } else {
            !trimmed.starts_with('+')
                && trimmed.chars().count() <= Self::MAX_ALPHANUMERIC_LEN
                && trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
        };
        if !valid {
            return Err(ValidationError::InvalidOriginator {
                input: trimmed.to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated originator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated recipient number as sent to MessageBird.
///
/// Invariant: non-empty after trimming. No normalization is applied.
pub struct Recipient(String);

impl Recipient {
    /// Form field name used by MessageBird (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`body`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageBody(String);

impl MessageBody {
    /// Form field name used by MessageBird (`body`).
    pub const FIELD: &'static str = "body";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

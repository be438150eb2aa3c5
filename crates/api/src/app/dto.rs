use serde::{Deserialize, Serialize};

use userapi_core::{DomainError, UserFields, UserId};

pub const USER_CREATED: &str = "User created successfully";

// -------------------------
// Request decoding
// -------------------------

/// Decode a user body regardless of the declared content type.
pub fn decode_user(body: &[u8]) -> Result<UserFields, DomainError> {
    serde_json::from_slice(body)
        .map_err(|e| DomainError::invalid_payload(format!("unable to decode the request body: {e}")))
}

/// Parse the `:id` path segment.
pub fn parse_user_id(raw: &str) -> Result<UserId, DomainError> {
    raw.parse()
}

// -------------------------
// Response DTOs
// -------------------------

/// `{ id, message }` wrapper returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: i64,
    pub message: String,
}

impl Envelope {
    pub fn created(id: UserId) -> Self {
        Self {
            id: id.get(),
            message: USER_CREATED.to_string(),
        }
    }

    pub fn updated(id: UserId, affected: u64) -> Self {
        Self {
            id: id.get(),
            message: format!("User updated successfully. Total rows/record affected {affected}"),
        }
    }

    pub fn deleted(id: UserId, affected: u64) -> Self {
        Self {
            id: id.get(),
            message: format!("User deleted successfully. Total rows/record affected {affected}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_message_carries_the_affected_count() {
        let env = Envelope::updated(UserId::new(3), 1);
        assert_eq!(env.message, "User updated successfully. Total rows/record affected 1");
        assert_eq!(env.id, 3);
    }

    #[test]
    fn envelope_serializes_id_and_message() {
        let json = serde_json::to_string(&Envelope::created(UserId::new(1))).unwrap();
        assert_eq!(json, r#"{"id":1,"message":"User created successfully"}"#);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_user(b"{\"name\": "),
            Err(DomainError::InvalidPayload(_))
        ));
        assert!(matches!(decode_user(b""), Err(DomainError::InvalidPayload(_))));
    }

    #[test]
    fn parse_user_id_rejects_words() {
        assert!(matches!(parse_user_id("abc"), Err(DomainError::InvalidId(_))));
        assert_eq!(parse_user_id("12").unwrap(), UserId::new(12));
    }
}

//! The user entity.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Writable part of a user: everything except the store-assigned id.
///
/// Missing JSON fields decode to their zero value, and unknown fields
/// (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFields {
    pub name: String,
    pub age: i64,
    pub location: String,
}

impl UserFields {
    pub fn new(name: impl Into<String>, age: i64, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            location: location.into(),
        }
    }
}

/// A stored user.
///
/// Field order is the JSON wire order: `id, name, age, location`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i64,
    pub location: String,
}

impl User {
    pub fn from_fields(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            location: fields.location,
        }
    }

    /// Zero-valued user (`id` 0, empty strings).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            age: self.age,
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_in_wire_order() {
        let user = User::from_fields(UserId::new(1), UserFields::new("Ann", 30, "NYC"));
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ann","age":30,"location":"NYC"}"#);
    }

    #[test]
    fn fields_decode_with_zero_defaults_and_ignore_id() {
        let fields: UserFields = serde_json::from_str(r#"{"id":9,"name":"Bo"}"#).unwrap();
        assert_eq!(fields, UserFields::new("Bo", 0, ""));
    }

    #[test]
    fn fields_reject_wrongly_typed_age() {
        let err = serde_json::from_str::<UserFields>(r#"{"name":"Bo","age":"old"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn empty_user_is_all_zero_values() {
        let json = serde_json::to_value(User::empty()).unwrap();
        assert_eq!(json, serde_json::json!({"id": 0, "name": "", "age": 0, "location": ""}));
    }
}

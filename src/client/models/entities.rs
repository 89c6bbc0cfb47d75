use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageStatus {
    Unread,
    Read,
}

/// Registered user, read-only on the client once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: MessageStatus,
    pub sender: UserData,
    pub recipient: UserData,
    pub created_at: DateTime<Utc>,
}

impl MessageData {
    /// Date label for the table, dd/mm/YYYY HH:MM.
    pub fn created_label(&self) -> String {
        self.created_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

/// Payload for POST /api/messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageData {
    pub title: String,
    pub description: String,
    pub recipients: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> &'static str {
        r#"{"id":7,"firstName":"Laura","lastName":"Paz","email":"laura@sinergia.com","role":"ADMIN"}"#
    }

    #[test]
    fn user_decodes_camel_case_fields() {
        let user: UserData = serde_json::from_str(user_json()).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Laura");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn message_decodes_with_nested_users_and_timestamp() {
        let json = format!(
            r#"{{"id":1,"title":"Inducción","description":"Charla de seguridad",
                "status":"UNREAD","sender":{u},"recipient":{u},
                "createdAt":"2024-03-01T12:30:00Z"}}"#,
            u = user_json()
        );
        let msg: MessageData = serde_json::from_str(&json).unwrap();
        assert_eq!(msg.status, MessageStatus::Unread);
        assert_eq!(msg.created_label(), "01/03/2024 12:30");
    }

    #[test]
    fn send_payload_uses_wire_names() {
        let payload = SendMessageData {
            title: "Aviso".into(),
            description: "Detalle".into(),
            recipients: vec![3, 9],
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["recipients"], serde_json::json!([3, 9]));
        assert!(v.get("title").is_some());
    }
}

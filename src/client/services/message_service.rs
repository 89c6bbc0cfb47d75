use serde_json::json;

use crate::client::models::entities::{MessageData, SendMessageData};
use crate::client::services::api_client::{ApiClient, ApiResult, Session};

#[derive(Debug, Default)]
pub struct MessageService;

impl MessageService {
    /// All messages visible to the current session (sent or received,
    /// depending on role). Order is whatever the backend returns; the
    /// view-model owns sorting.
    pub async fn fetch_messages(api: &ApiClient, session: &Session) -> ApiResult<Vec<MessageData>> {
        api.get_json(session, "/api/messages").await
    }

    /// Marks a message READ server-side.
    pub async fn update_message_status(
        api: &ApiClient,
        session: &Session,
        message_id: i64,
    ) -> ApiResult<()> {
        let path = format!("/api/messages/{message_id}");
        api.patch_json(session, &path, &json!({ "status": "READ" })).await
    }

    pub async fn send_message(
        api: &ApiClient,
        session: &Session,
        payload: &SendMessageData,
    ) -> ApiResult<()> {
        api.post_json(session, "/api/messages", payload).await
    }
}

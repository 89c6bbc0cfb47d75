use crate::client::models::entities::UserData;
use crate::client::services::api_client::{ApiClient, ApiResult, Session};

#[derive(Debug, Default)]
pub struct UsersService;

impl UsersService {
    /// List all registered users, used to pick message recipients.
    pub async fn fetch_all_users(api: &ApiClient, session: &Session) -> ApiResult<Vec<UserData>> {
        api.get_json(session, "/api/users").await
    }

    /// Resolve the user owning the current session.
    pub async fn fetch_profile(api: &ApiClient, session: &Session) -> ApiResult<UserData> {
        api.get_json(session, "/api/users/me").await
    }
}

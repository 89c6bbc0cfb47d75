use crate::client::models::app_state::PortalTab;
use crate::client::models::entities::{MessageData, UserData};
use crate::client::services::api_client::ApiError;
use crate::client::viewmodel::messages_view::MessageColumn;
use crate::client::viewmodel::users_view::UserColumn;

#[derive(Debug, Clone)]
pub enum Message {
    // startup / session
    SessionChecked { token: Option<String> },
    ProfileLoaded { result: Result<UserData, ApiError> },

    // navigation
    OpenPortal,
    OpenLanding,
    SelectTab(PortalTab),

    // message table
    MessagesLoaded { epoch: u64, result: Result<Vec<MessageData>, ApiError> },
    ReadMessage(MessageData),
    ReadConfirmed { result: Result<(), ApiError> },
    CloseMessageDetail,
    SortMessages(MessageColumn),
    MessagesPrevPage,
    MessagesNextPage,

    // user table / compose
    UsersLoaded { epoch: u64, result: Result<Vec<UserData>, ApiError> },
    ToggleRecipient(i64),
    RemoveRecipient(i64),
    OpenCompose,
    CloseCompose,
    ComposeTitleChanged(String),
    ComposeDescriptionChanged(String),
    SubmitCompose,
    ComposeSent { result: Result<(), ApiError> },
    SortUsers(UserColumn),
    UsersPrevPage,
    UsersNextPage,

    // notices and session expiration
    DismissNotice,
    ExpirationAcknowledged,
}

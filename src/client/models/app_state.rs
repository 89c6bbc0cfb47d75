use iced::Command;

use crate::client::config::ClientConfig;
use crate::client::models::entities::{Role, UserData};
use crate::client::models::messages::Message;
use crate::client::services::api_client::{ApiClient, ApiError, Session};
use crate::client::services::message_service::MessageService;
use crate::client::services::users_service::UsersService;
use crate::client::utils::session_store;
use crate::client::viewmodel::messages_view::{LoadState, MessagesViewModel};
use crate::client::viewmodel::users_view::UsersViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    CheckingSession,
    Landing,
    Portal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalTab {
    #[default]
    Messages,
    Users,
}

/// Whole-app state. Update logic lives here; the GUI modules only render it
/// and emit `Message` values.
#[derive(Debug)]
pub struct PortalAppState {
    pub app_state: AppState,
    pub active_tab: PortalTab,
    pub session: Option<Session>,
    pub viewer: Option<UserData>,
    pub messages_view: MessagesViewModel,
    pub users_view: UsersViewModel,
    /// Transient, dismissable notice for generic failures.
    pub notice: Option<String>,
    /// Raised by any call rejected with `ApiError::Expired`; blocks the
    /// portal until the user acknowledges and signs in again.
    pub session_expired: bool,
}

impl PortalAppState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            app_state: AppState::default(),
            active_tab: PortalTab::default(),
            session: None,
            viewer: None,
            messages_view: MessagesViewModel::new(config.page_size),
            users_view: UsersViewModel::new(config.page_size),
            notice: None,
            session_expired: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.viewer.as_ref().map(|v| v.role), Some(Role::Admin))
    }

    fn raise_expiration(&mut self) {
        self.session_expired = true;
        // the blocking prompt replaces every other notice
        self.notice = None;
        self.messages_view.dismiss_notice();
    }

    fn fetch_messages(&mut self, api: &ApiClient) -> Command<Message> {
        let Some(session) = self.session.clone() else {
            return Command::none();
        };
        let epoch = self.messages_view.begin_fetch();
        let api = api.clone();
        Command::perform(
            async move {
                let result = MessageService::fetch_messages(&api, &session).await;
                Message::MessagesLoaded { epoch, result }
            },
            |msg| msg,
        )
    }

    fn fetch_users(&mut self, api: &ApiClient) -> Command<Message> {
        let Some(session) = self.session.clone() else {
            return Command::none();
        };
        let epoch = self.users_view.begin_fetch();
        let api = api.clone();
        Command::perform(
            async move {
                let result = UsersService::fetch_all_users(&api, &session).await;
                Message::UsersLoaded { epoch, result }
            },
            |msg| msg,
        )
    }

    pub fn update(&mut self, message: Message, api: &ApiClient) -> Command<Message> {
        match message {
            Message::SessionChecked { token } => {
                self.app_state = AppState::Landing;
                self.session = token.and_then(Session::new);
                if let Some(session) = self.session.clone() {
                    let api = api.clone();
                    return Command::perform(
                        async move {
                            let result = UsersService::fetch_profile(&api, &session).await;
                            Message::ProfileLoaded { result }
                        },
                        |msg| msg,
                    );
                }
                log::info!("[APP] no stored session, landing in signed-out mode");
            }
            Message::ProfileLoaded { result } => match result {
                Ok(viewer) => {
                    log::info!("[APP] session resolved for user id {}", viewer.id);
                    self.viewer = Some(viewer);
                }
                Err(ApiError::Expired) => self.raise_expiration(),
                Err(ApiError::Failed(_)) => {
                    self.notice = Some("Error al obtener datos del usuario.".to_string());
                }
            },

            Message::OpenPortal => {
                if self.viewer.is_some() {
                    self.app_state = AppState::Portal;
                    self.active_tab = PortalTab::Messages;
                    return self.fetch_messages(api);
                }
            }
            Message::OpenLanding => {
                self.app_state = AppState::Landing;
                // pending responses for the portal views are now stale
                self.messages_view.invalidate();
                self.users_view.invalidate();
            }
            Message::SelectTab(tab) => {
                return match tab {
                    PortalTab::Messages => {
                        self.active_tab = tab;
                        self.users_view.invalidate();
                        self.fetch_messages(api)
                    }
                    // the user directory is an admin surface
                    PortalTab::Users if self.is_admin() => {
                        self.active_tab = tab;
                        self.messages_view.invalidate();
                        self.fetch_users(api)
                    }
                    PortalTab::Users => Command::none(),
                };
            }

            Message::MessagesLoaded { epoch, result } => {
                self.messages_view.apply_fetch(epoch, result);
                if self.messages_view.state() == &LoadState::Expired {
                    self.raise_expiration();
                }
            }
            Message::ReadMessage(message) => {
                let Some(viewer) = self.viewer.clone() else {
                    return Command::none();
                };
                let confirm = self.messages_view.handle_read(&message, &viewer);
                if let (Some(message_id), Some(session)) = (confirm, self.session.clone()) {
                    let api = api.clone();
                    return Command::perform(
                        async move {
                            let result =
                                MessageService::update_message_status(&api, &session, message_id)
                                    .await;
                            Message::ReadConfirmed { result }
                        },
                        |msg| msg,
                    );
                }
            }
            Message::ReadConfirmed { result } => {
                let expired = result == Err(ApiError::Expired);
                self.messages_view.confirm_read(result);
                if expired {
                    self.raise_expiration();
                }
            }
            Message::CloseMessageDetail => self.messages_view.close_detail(),
            Message::SortMessages(column) => self.messages_view.table.toggle_sort(column),
            Message::MessagesPrevPage => {
                let rows = self.messages_view.messages().len();
                self.messages_view.table.prev_page(rows);
            }
            Message::MessagesNextPage => {
                let rows = self.messages_view.messages().len();
                self.messages_view.table.next_page(rows);
            }

            Message::UsersLoaded { epoch, result } => {
                self.users_view.apply_fetch(epoch, result);
                if self.users_view.state() == &LoadState::Expired {
                    self.raise_expiration();
                }
            }
            Message::ToggleRecipient(id) => self.users_view.toggle_recipient(id),
            Message::RemoveRecipient(id) => self.users_view.remove_recipient(id),
            Message::OpenCompose => {
                self.users_view.open_compose();
            }
            Message::CloseCompose => self.users_view.close_compose(),
            Message::ComposeTitleChanged(title) => self.users_view.set_compose_title(title),
            Message::ComposeDescriptionChanged(description) => {
                self.users_view.set_compose_description(description)
            }
            Message::SubmitCompose => {
                if let (Some(payload), Some(session)) =
                    (self.users_view.take_payload(), self.session.clone())
                {
                    let api = api.clone();
                    return Command::perform(
                        async move {
                            let result = MessageService::send_message(&api, &session, &payload).await;
                            Message::ComposeSent { result }
                        },
                        |msg| msg,
                    );
                }
            }
            Message::ComposeSent { result } => match result {
                Ok(()) => {
                    self.notice = Some("Mensaje enviado correctamente.".to_string());
                }
                Err(ApiError::Expired) => self.raise_expiration(),
                Err(ApiError::Failed(_)) => {
                    self.notice = Some("Error al enviar el mensaje.".to_string());
                }
            },
            Message::SortUsers(column) => self.users_view.table.toggle_sort(column),
            Message::UsersPrevPage => {
                let rows = self.users_view.users().len();
                self.users_view.table.prev_page(rows);
            }
            Message::UsersNextPage => {
                let rows = self.users_view.users().len();
                self.users_view.table.next_page(rows);
            }

            Message::DismissNotice => {
                self.notice = None;
                self.messages_view.dismiss_notice();
            }
            Message::ExpirationAcknowledged => {
                // the rejected token is dropped only here, on the user's action
                if let Err(e) = session_store::clear_access_token() {
                    log::warn!("[APP] could not clear stored token: {e}");
                }
                let page_size = self.messages_view.table.page_size();
                self.session = None;
                self.viewer = None;
                self.session_expired = false;
                self.messages_view = MessagesViewModel::new(page_size);
                self.users_view = UsersViewModel::new(page_size);
                self.app_state = AppState::Landing;
            }
        }
        Command::none()
    }
}

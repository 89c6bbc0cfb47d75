use iced::{Application, Command, Element, Theme};

use crate::client::config::ClientConfig;
use crate::client::gui::{views, widgets};
use crate::client::models::app_state::{AppState, PortalAppState, PortalTab};
use crate::client::models::messages::Message;
use crate::client::services::api_client::ApiClient;
use crate::client::utils::session_store;

pub struct PortalFlags {
    pub config: ClientConfig,
    pub api: ApiClient,
}

pub struct PortalApp {
    pub state: PortalAppState,
    pub api: ApiClient,
}

impl Application for PortalApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = PortalFlags;

    fn new(flags: PortalFlags) -> (Self, Command<Message>) {
        let app = PortalApp {
            state: PortalAppState::new(&flags.config),
            api: flags.api,
        };
        // Startup session check: read the stored token (may be absent) and
        // let the update loop resolve the profile from it.
        let cmd = Command::perform(
            async {
                let token = session_store::load_access_token();
                Message::SessionChecked { token }
            },
            |m| m,
        );
        (app, cmd)
    }

    fn title(&self) -> String {
        "Sinergia".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.api)
    }

    fn view(&self) -> Element<Message> {
        if self.state.session_expired {
            return widgets::card::expiration_prompt();
        }
        match self.state.app_state {
            AppState::CheckingSession => iced::widget::Text::new("Verificando sesión...").into(),
            AppState::Landing => views::landing::view(&self.state),
            AppState::Portal => match self.state.active_tab {
                PortalTab::Messages => views::messages::view(&self.state),
                PortalTab::Users => views::users::view(&self.state),
            },
        }
    }
}

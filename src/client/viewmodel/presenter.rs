use crate::client::models::entities::{MessageData, MessageStatus, Role, UserData};

/// Status badge of a table row. Which variant applies is a pure function of
/// `(message, viewer)`: admins read authorship, users read the read state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Sent,
    Received,
    Read,
    Unread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Yellow,
    Red,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Sent => "enviado",
            Badge::Received => "recibido",
            Badge::Read => "visto",
            Badge::Unread => "no visto",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Badge::Sent | Badge::Read => BadgeTone::Green,
            Badge::Received => BadgeTone::Yellow,
            Badge::Unread => BadgeTone::Red,
        }
    }
}

/// Role-dependent rendering rules for a message row. One variant per role so
/// the two behaviors stay free of scattered role conditionals.
pub trait RowPresenter {
    fn badge(&self, message: &MessageData) -> Badge;
    fn action_label(&self) -> &'static str;
    /// The sender column only exists for USER viewers; the admin's sent/
    /// received badge already carries the authorship.
    fn shows_sender_column(&self) -> bool;
}

pub struct AdminView {
    pub viewer_id: i64,
}

impl RowPresenter for AdminView {
    fn badge(&self, message: &MessageData) -> Badge {
        if message.sender.id == self.viewer_id {
            Badge::Sent
        } else {
            Badge::Received
        }
    }

    fn action_label(&self) -> &'static str {
        "Ver"
    }

    fn shows_sender_column(&self) -> bool {
        false
    }
}

pub struct UserView;

impl RowPresenter for UserView {
    fn badge(&self, message: &MessageData) -> Badge {
        match message.status {
            MessageStatus::Read => Badge::Read,
            MessageStatus::Unread => Badge::Unread,
        }
    }

    fn action_label(&self) -> &'static str {
        "Leer"
    }

    fn shows_sender_column(&self) -> bool {
        true
    }
}

pub fn for_viewer(viewer: &UserData) -> Box<dyn RowPresenter> {
    match viewer.role {
        Role::Admin => Box::new(AdminView { viewer_id: viewer.id }),
        Role::User => Box::new(UserView),
    }
}

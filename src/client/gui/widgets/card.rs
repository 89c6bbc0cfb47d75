use iced::widget::{Button, Column, Container, Text};
use iced::{Alignment, Color, Element, Length};

use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.94, 0.95, 0.96);
const TITLE_COLOR: Color = Color::from_rgb(0.1, 0.12, 0.2);

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TITLE_COLOR),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.6, 0.76, 0.85),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

/// Centered card used for the message detail, compose form and the
/// expiration prompt.
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(24)
        .max_width(540.0)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
}

/// Blocking session-expired prompt. Replaces all portal content: the only
/// way forward is acknowledging and signing in again.
pub fn expiration_prompt<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(Text::new("Sesión expirada").size(24))
        .push(
            Text::new("Tu sesión expiró. Iniciá sesión nuevamente para seguir usando el portal.")
                .size(15),
        )
        .push(
            Button::new(Text::new("Entendido"))
                .on_press(Message::ExpirationAcknowledged)
                .padding([8, 24]),
        );

    Container::new(card(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}

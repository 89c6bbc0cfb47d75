// Barra de aviso transitoria para errores genéricos
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Length};

use crate::client::models::messages::Message;

const NOTICE_BG: Color = Color::from_rgb(0.99, 0.95, 0.78);
const NOTICE_TEXT: Color = Color::from_rgb(0.45, 0.35, 0.05);

fn notice_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(NOTICE_BG)),
        text_color: Some(NOTICE_TEXT),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.85, 0.75, 0.4),
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Dismissable toast-style notice. Never blocks the view underneath.
pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new(msg).size(14))
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(
                Button::new(Text::new("✕").size(14))
                    .on_press(Message::DismissNotice)
                    .style(iced::theme::Button::Text)
                    .padding(4),
            ),
    )
    .padding([8, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(notice_appearance)))
    .into()
}

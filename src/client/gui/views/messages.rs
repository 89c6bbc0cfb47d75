use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::{alert, card};
use crate::client::models::app_state::{PortalAppState, PortalTab};
use crate::client::models::entities::MessageData;
use crate::client::models::messages::Message;
use crate::client::viewmodel::messages_view::{LoadState, MessageColumn};
use crate::client::viewmodel::presenter::{self, Badge, BadgeTone, RowPresenter};

const TEXT_DARK: Color = Color::from_rgb(0.12, 0.14, 0.18);
const TEXT_MUTED: Color = Color::from_rgb(0.35, 0.38, 0.42);
const ROW_BORDER: Color = Color::from_rgb(0.85, 0.87, 0.89);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn row_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        border: iced::Border {
            width: 1.0,
            color: ROW_BORDER,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn view(state: &PortalAppState) -> Element<'_, Message> {
    let Some(viewer) = &state.viewer else {
        return Text::new("Cargando...").into();
    };

    let vm = &state.messages_view;
    let mut content = Column::new().spacing(16).padding(24).push(header(state));

    if let Some(notice) = &state.notice {
        content = content.push(alert::view(notice));
    }
    if let Some(notice) = vm.update_notice() {
        content = content.push(alert::view(notice));
    }

    if let Some(message) = vm.selected() {
        content = content.push(detail_card(message));
        return Scrollable::new(content).width(Length::Fill).into();
    }

    let body: Element<'_, Message> = match vm.state() {
        LoadState::Loading => Text::new("Cargando...").into(),
        LoadState::Errored(reason) => Text::new(reason.as_str()).into(),
        LoadState::Expired => Text::new("La sesión expiró.").into(),
        LoadState::Ready => {
            if vm.shows_placeholder() {
                empty_state()
            } else {
                let presenter = presenter::for_viewer(viewer);
                let mut table = Column::new().push(header_row(presenter.as_ref()));
                for message in vm.visible_rows() {
                    table = table.push(message_row(message, presenter.as_ref()));
                }
                let mut body = Column::new().spacing(12).push(table);
                if vm.page_count() > 1 {
                    body = body.push(pagination(state));
                }
                body.into()
            }
        }
    };

    content = content.push(body);
    Scrollable::new(content).width(Length::Fill).into()
}

fn header(state: &PortalAppState) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Button::new(Text::new("← Inicio").size(14))
                .on_press(Message::OpenLanding)
                .style(iced::theme::Button::Secondary)
                .padding(8),
        )
        .push(Text::new("Mis mensajes").font(BOLD_FONT).size(22).style(TEXT_DARK))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    if state.is_admin() {
        row = row.push(
            Button::new(Text::new("Usuarios").size(14))
                .on_press(Message::SelectTab(PortalTab::Users))
                .padding(8),
        );
    }
    row.into()
}

fn header_row(presenter: &dyn RowPresenter) -> Element<'static, Message> {
    let mut row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fixed(90.0), Length::Fixed(0.0)))
        .push(sort_button("Título", MessageColumn::Title, Length::Fill));
    if presenter.shows_sender_column() {
        row = row.push(sort_button("Enviado por", MessageColumn::Sender, Length::Fixed(150.0)));
    }
    row = row
        .push(sort_button("Fecha", MessageColumn::Date, Length::Fixed(150.0)))
        .push(sort_button("Estado", MessageColumn::Status, Length::Fixed(120.0)));

    Container::new(row)
        .padding([6, 10])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(row_appearance)))
        .into()
}

fn sort_button(label: &'static str, column: MessageColumn, width: Length) -> Element<'static, Message> {
    Container::new(
        Button::new(Text::new(label).font(BOLD_FONT).size(13).style(TEXT_MUTED))
            .on_press(Message::SortMessages(column))
            .style(iced::theme::Button::Text)
            .padding(0),
    )
    .width(width)
    .into()
}

fn message_row<'a>(message: &'a MessageData, presenter: &dyn RowPresenter) -> Element<'a, Message> {
    let action = Button::new(Text::new(presenter.action_label()).size(13))
        .on_press(Message::ReadMessage(message.clone()))
        .padding([6, 12]);

    let mut row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Container::new(action).width(Length::Fixed(90.0)))
        .push(Container::new(Text::new(&message.title).size(14)).width(Length::Fill));
    if presenter.shows_sender_column() {
        row = row.push(
            Container::new(Text::new(&message.sender.first_name).size(14))
                .width(Length::Fixed(150.0)),
        );
    }
    row = row
        .push(
            Container::new(Text::new(message.created_label()).size(13).style(TEXT_MUTED))
                .width(Length::Fixed(150.0)),
        )
        .push(Container::new(badge_el(presenter.badge(message))).width(Length::Fixed(120.0)));

    Container::new(row)
        .padding([8, 10])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(row_appearance)))
        .into()
}

fn badge_el(badge: Badge) -> Element<'static, Message> {
    let (bg, fg) = match badge.tone() {
        BadgeTone::Green => (Color::from_rgb(0.53, 0.94, 0.67), Color::from_rgb(0.08, 0.50, 0.24)),
        BadgeTone::Yellow => (Color::from_rgb(0.99, 0.88, 0.28), Color::from_rgb(0.63, 0.38, 0.03)),
        BadgeTone::Red => (Color::from_rgb(0.99, 0.65, 0.65), Color::from_rgb(0.73, 0.11, 0.11)),
    };
    Container::new(Text::new(badge.label()).font(BOLD_FONT).size(12))
        .padding([5, 12])
        .style(iced::theme::Container::Custom(Box::new(
            move |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg)),
                text_color: Some(fg),
                border: iced::Border {
                    width: 0.0,
                    color: Color::TRANSPARENT,
                    radius: 8.0.into(),
                },
                ..Default::default()
            },
        )))
        .into()
}

fn pagination(state: &PortalAppState) -> Element<'_, Message> {
    let vm = &state.messages_view;
    let rows = vm.messages().len();
    let page = vm.table.page(rows);
    let pages = vm.page_count();

    let mut prev = Button::new(Text::new("Anterior").size(13)).padding([6, 12]);
    if page > 0 {
        prev = prev.on_press(Message::MessagesPrevPage);
    }
    let mut next = Button::new(Text::new("Siguiente").size(13)).padding([6, 12]);
    if page + 1 < pages {
        next = next.on_press(Message::MessagesNextPage);
    }

    Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(prev)
        .push(Text::new(format!("Página {} de {}", page + 1, pages)).size(13).style(TEXT_MUTED))
        .push(next)
        .into()
}

fn empty_state() -> Element<'static, Message> {
    // placeholder instead of the table; no pagination controls here
    Container::new(
        Column::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("📭").size(48))
            .push(Text::new("No tenés mensajes todavía.").size(14).style(TEXT_MUTED)),
    )
    .padding(60)
    .width(Length::Fill)
    .center_x()
    .into()
}

fn detail_card(message: &MessageData) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(12)
        .push(Text::new(&message.title).font(BOLD_FONT).size(20).style(TEXT_DARK))
        .push(
            Text::new(format!(
                "De {} {} · {}",
                message.sender.first_name,
                message.sender.last_name,
                message.created_label()
            ))
            .size(13)
            .style(TEXT_MUTED),
        )
        .push(Text::new(&message.description).size(14))
        .push(
            Button::new(Text::new("Cerrar"))
                .on_press(Message::CloseMessageDetail)
                .style(iced::theme::Button::Secondary)
                .padding([8, 20]),
        );

    Container::new(card::card(content))
        .width(Length::Fill)
        .center_x()
        .into()
}

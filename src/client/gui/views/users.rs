use iced::widget::{Button, Checkbox, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::{alert, card};
use crate::client::models::app_state::{PortalAppState, PortalTab};
use crate::client::models::entities::UserData;
use crate::client::models::messages::Message;
use crate::client::viewmodel::messages_view::LoadState;
use crate::client::viewmodel::users_view::UserColumn;

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
    let vm = &state.users_view;
    let mut content = Column::new().spacing(16).padding(24).push(header());

    if let Some(notice) = &state.notice {
        content = content.push(alert::view(notice));
    }

    if vm.compose().is_some() {
        content = content.push(compose_card(state));
        return Scrollable::new(content).width(Length::Fill).into();
    }

    let body: Element<'_, Message> = match vm.state() {
        LoadState::Loading => Text::new("Cargando...").into(),
        LoadState::Errored(reason) => Text::new(reason.as_str()).into(),
        LoadState::Expired => Text::new("La sesión expiró.").into(),
        LoadState::Ready => {
            if vm.shows_placeholder() {
                Container::new(Text::new("No hay usuarios registrados").size(14).style(TEXT_MUTED))
                    .padding(40)
                    .width(Length::Fill)
                    .center_x()
                    .into()
            } else {
                let mut table = Column::new().push(header_row());
                for user in vm.visible_rows() {
                    table = table.push(user_row(user, vm.is_selected(user.id)));
                }
                let mut body = Column::new().spacing(12).push(table);
                if vm.page_count() > 1 {
                    body = body.push(pagination(state));
                }
                body = body.push(send_button(state));
                body.into()
            }
        }
    };

    content = content.push(body);
    Scrollable::new(content).width(Length::Fill).into()
}

fn header() -> Element<'static, Message> {
    Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Button::new(Text::new("← Inicio").size(14))
                .on_press(Message::OpenLanding)
                .style(iced::theme::Button::Secondary)
                .padding(8),
        )
        .push(Text::new("Usuarios registrados").font(BOLD_FONT).size(22).style(TEXT_DARK))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("Mensajes").size(14))
                .on_press(Message::SelectTab(PortalTab::Messages))
                .padding(8),
        )
        .into()
}

fn header_row() -> Element<'static, Message> {
    let row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Container::new(Text::new("Seleccionar").font(BOLD_FONT).size(13).style(TEXT_MUTED))
                .width(Length::Fixed(100.0)),
        )
        .push(sort_button("Nombre", UserColumn::FirstName, Length::Fill))
        .push(sort_button("Apellido", UserColumn::LastName, Length::Fill))
        .push(sort_button("Email", UserColumn::Email, Length::Fill));

    Container::new(row)
        .padding([6, 10])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(row_appearance)))
        .into()
}

fn sort_button(label: &'static str, column: UserColumn, width: Length) -> Element<'static, Message> {
    Container::new(
        Button::new(Text::new(label).font(BOLD_FONT).size(13).style(TEXT_MUTED))
            .on_press(Message::SortUsers(column))
            .style(iced::theme::Button::Text)
            .padding(0),
    )
    .width(width)
    .into()
}

fn user_row(user: &UserData, selected: bool) -> Element<'_, Message> {
    let id = user.id;
    let row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Container::new(
                Checkbox::new("", selected).on_toggle(move |_| Message::ToggleRecipient(id)),
            )
            .width(Length::Fixed(100.0))
            .center_x(),
        )
        .push(Container::new(Text::new(&user.first_name).size(14)).width(Length::Fill))
        .push(Container::new(Text::new(&user.last_name).size(14)).width(Length::Fill))
        .push(Container::new(Text::new(&user.email).size(14).style(TEXT_MUTED)).width(Length::Fill));

    Container::new(row)
        .padding([8, 10])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(row_appearance)))
        .into()
}

fn pagination(state: &PortalAppState) -> Element<'_, Message> {
    let vm = &state.users_view;
    let rows = vm.users().len();
    let page = vm.table.page(rows);
    let pages = vm.page_count();

    let mut prev = Button::new(Text::new("Anterior").size(13)).padding([6, 12]);
    if page > 0 {
        prev = prev.on_press(Message::UsersPrevPage);
    }
    let mut next = Button::new(Text::new("Siguiente").size(13)).padding([6, 12]);
    if page + 1 < pages {
        next = next.on_press(Message::UsersNextPage);
    }

    Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(prev)
        .push(Text::new(format!("Página {} de {}", page + 1, pages)).size(13).style(TEXT_MUTED))
        .push(next)
        .into()
}

fn send_button(state: &PortalAppState) -> Element<'_, Message> {
    // enabled only while at least one recipient is selected
    let mut button = Button::new(Text::new("Enviar mensaje").size(14)).padding([8, 16]);
    if state.users_view.has_selection() {
        button = button.on_press(Message::OpenCompose);
    }
    Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(button)
        .push(
            Text::new(format!("{} seleccionados", state.users_view.selection_len()))
                .size(13)
                .style(TEXT_MUTED),
        )
        .into()
}

fn compose_card(state: &PortalAppState) -> Element<'_, Message> {
    let vm = &state.users_view;
    let Some(compose) = vm.compose() else {
        return Space::new(Length::Fixed(0.0), Length::Fixed(0.0)).into();
    };

    let mut recipients = Row::new().spacing(8).align_items(Alignment::Center);
    for user in vm.selected_recipients() {
        let id = user.id;
        recipients = recipients.push(
            Row::new()
                .spacing(4)
                .align_items(Alignment::Center)
                .push(Text::new(format!("{} {}", user.first_name, user.last_name)).size(13))
                .push(
                    Button::new(Text::new("✕").size(12))
                        .on_press(Message::RemoveRecipient(id))
                        .style(iced::theme::Button::Text)
                        .padding(2),
                ),
        );
    }

    let mut submit = Button::new(Text::new("Enviar").size(14)).padding([8, 20]);
    if vm.can_submit() {
        submit = submit.on_press(Message::SubmitCompose);
    }

    let content = Column::new()
        .spacing(14)
        .push(Text::new("Nuevo mensaje").font(BOLD_FONT).size(20).style(TEXT_DARK))
        .push(Text::new("Para:").size(13).style(TEXT_MUTED))
        .push(Scrollable::new(recipients).width(Length::Fill))
        .push(
            TextInput::new("Título", &compose.title)
                .on_input(Message::ComposeTitleChanged)
                .padding(10),
        )
        .push(
            TextInput::new("Mensaje...", &compose.description)
                .on_input(Message::ComposeDescriptionChanged)
                .padding(10),
        )
        .push(
            Row::new()
                .spacing(12)
                .push(submit)
                .push(
                    Button::new(Text::new("Cancelar").size(14))
                        .on_press(Message::CloseCompose)
                        .style(iced::theme::Button::Secondary)
                        .padding([8, 20]),
                ),
        );

    Container::new(card::card(content))
        .width(Length::Fill)
        .center_x()
        .into()
}

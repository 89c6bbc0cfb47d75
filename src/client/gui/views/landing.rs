use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::PortalAppState;
use crate::client::models::messages::Message;

const HERO_BG: Color = Color::from_rgb(0.11, 0.16, 0.23);
const ACCENT: Color = Color::from_rgb(0.27, 0.76, 0.79);
const CARD_BG: Color = Color::from_rgb(0.94, 0.95, 0.96);
const TEXT_DARK: Color = Color::from_rgb(0.12, 0.14, 0.18);
const TEXT_MUTED: Color = Color::from_rgb(0.35, 0.38, 0.42);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn hero_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(HERO_BG)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

fn value_card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_DARK),
        border: iced::Border {
            width: 1.0,
            color: ACCENT,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn view(state: &PortalAppState) -> Element<'_, Message> {
    let nav = navbar(state);
    let hero = Container::new(
        Column::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new("SOMOS SINERGIA").font(BOLD_FONT).size(56))
            .push(Text::new("Seguridad e Higiene y Medio Ambiente").size(26)),
    )
    .padding([90, 40])
    .width(Length::Fill)
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(hero_appearance)));

    let cards = Row::new()
        .spacing(20)
        .push(value_card(
            "Misión",
            "Acompañar a nuestros clientes en la gestión integral de la \
             Seguridad e Higiene, cuidando a las personas y al ambiente en \
             cada proyecto.",
        ))
        .push(value_card(
            "Visión",
            "Ser la consultora de referencia en la región, reconocida por la \
             calidad técnica y el compromiso con cada obra en la que \
             participamos.",
        ))
        .push(value_card(
            "Valores",
            "Prevención, responsabilidad profesional y mejora continua como \
             base de cada decisión, en la oficina y en el campo.",
        ));

    let about = Column::new()
        .spacing(12)
        .push(Text::new("Quienes Somos").font(BOLD_FONT).size(28).style(TEXT_DARK))
        .push(
            Text::new(
                "Somos un equipo de profesionales con más de 15 años de \
                 experiencia en el área de Seguridad e Higiene y Medio \
                 Ambiente.",
            )
            .font(BOLD_FONT)
            .size(15)
            .style(TEXT_DARK),
        )
        .push(
            Text::new(
                "Participamos de importantes proyectos a lo largo y ancho del \
                 país, dando soporte y acompañamiento a empresas lideres en la \
                 industria de la construcción, formando parte de grandes obras \
                 de saneamiento, ingeniería, arquitectura, viales, hídricas e \
                 hidráulicas. Desde 2019 nos asentamos en la cuenca neuquina, \
                 trabajando al servicio de empresas lideres en la industria \
                 Oil&Gas, teniendo la oportunidad de participar en diferentes \
                 proyectos para empresas contratistas y de servicios afectados \
                 a operadoras como YPF, GeoPark, Oilstone, Shell, Pluspetrol y \
                 Chevron.",
            )
            .size(14)
            .style(TEXT_MUTED),
        );

    let mut content = Column::new()
        .spacing(32)
        .push(nav)
        .push(hero)
        .push(Container::new(cards).width(Length::Fill).center_x().padding([0, 30]))
        .push(Container::new(about).width(Length::Fill).center_x().padding([0, 60]));

    if let Some(notice) = &state.notice {
        content = content.push(
            Container::new(crate::client::gui::widgets::alert::view(notice)).padding([0, 30]),
        );
    }

    content = content.push(Space::new(Length::Fill, Length::Fixed(40.0)));

    Scrollable::new(content).width(Length::Fill).into()
}

fn navbar(state: &PortalAppState) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .padding([12, 24])
        .push(Text::new("SINERGIA").font(BOLD_FONT).size(20).style(ACCENT))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    match &state.viewer {
        Some(viewer) => {
            row = row
                .push(Text::new(format!("Hola, {}", viewer.first_name)).size(14).style(TEXT_MUTED))
                .push(
                    Button::new(Text::new("Ir al portal"))
                        .on_press(Message::OpenPortal)
                        .padding([8, 16]),
                );
        }
        None => {
            row = row.push(
                Text::new("Iniciá sesión para acceder al portal de mensajes")
                    .size(14)
                    .style(TEXT_MUTED),
            );
        }
    }
    row.into()
}

fn value_card<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new(title).font(BOLD_FONT).size(18))
            .push(Text::new(body).size(13).style(TEXT_MUTED)),
    )
    .padding(20)
    .width(Length::Fixed(290.0))
    .style(iced::theme::Container::Custom(Box::new(value_card_appearance)))
    .into()
}

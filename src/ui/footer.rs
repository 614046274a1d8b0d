use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use crate::content::{BRAND, CONTACT_EMAIL, TAGLINE};
use crate::layout::FOOTER_HEIGHT;
use crate::Message;

pub fn view() -> Element<'static, Message> {
    container(
        column![
            text(BRAND).size(type_scale::TITLE).color(palette::GOLD),
            text(TAGLINE)
                .size(type_scale::CAPTION)
                .color(palette::faded(palette::CREAM, 0.6)),
            text(CONTACT_EMAIL)
                .size(type_scale::CAPTION)
                .color(palette::faded(palette::GOLD, 0.8)),
            text("© 2026 Senabel Atelier. All rights reserved.")
                .size(type_scale::CAPTION)
                .color(palette::faded(palette::CREAM, 0.4)),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(FOOTER_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::section_charcoal)
    .into()
}

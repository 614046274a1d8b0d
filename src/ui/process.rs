//! The bespoke journey: atelier image on the left, numbered steps on the
//! right.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use crate::content::{PROCESS_IMAGE, PROCESS_STEPS};
use crate::route::Anchor;
use crate::Message;

pub fn view() -> Element<'static, Message> {
    let artwork = image(PROCESS_IMAGE.path())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let mut steps = column![].spacing(spacing::XL);
    for step in PROCESS_STEPS {
        steps = steps.push(
            row![
                text(step.number)
                    .size(type_scale::SMALL)
                    .color(palette::faded(palette::GOLD, 0.6)),
                column![
                    text(step.title)
                        .size(type_scale::LEAD)
                        .color(palette::GOLD),
                    text(step.description)
                        .size(type_scale::BODY)
                        .color(palette::faded(palette::CREAM, 0.7)),
                ]
                .spacing(spacing::XS),
            ]
            .spacing(spacing::LG),
        );
    }

    let copy = column![
        text("The Bespoke Journey")
            .size(type_scale::HEADING)
            .color(palette::GOLD),
        super::divider(64.0),
        steps,
        button(text("BOOK APPOINTMENT").size(type_scale::CAPTION))
            .style(theme::link_button)
            .on_press(Message::AnchorRequested(Anchor::Contact)),
    ]
    .spacing(spacing::XL)
    .max_width(620.0);

    row![
        container(artwork)
            .width(Length::FillPortion(1))
            .height(Length::Fill),
        container(copy)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .padding(spacing::XXL)
            .align_y(Alignment::Center),
    ]
    .into()
}

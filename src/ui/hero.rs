//! Full-height hero: campaign image under a dark scrim, brand lockup
//! centered on top.

use iced::widget::{button, column, container, image, stack, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use crate::content::{BRAND, ESTABLISHED, HERO_IMAGE, TAGLINE};
use crate::layout::PageMetrics;
use crate::route::Route;
use crate::Message;

pub fn view(metrics: PageMetrics) -> Element<'static, Message> {
    let height = Length::Fixed(metrics.hero_height());

    let backdrop = image(HERO_IMAGE.path())
        .width(Length::Fill)
        .height(height)
        .content_fit(ContentFit::Cover);

    let scrim = container(Space::new(Length::Fill, height))
        .width(Length::Fill)
        .height(height)
        .style(theme::scrim);

    let lockup = column![
        text(ESTABLISHED)
            .size(type_scale::SMALL)
            .color(palette::faded(palette::GOLD, 0.8)),
        text(BRAND).size(type_scale::DISPLAY).color(palette::GOLD),
        text(TAGLINE)
            .size(type_scale::TITLE)
            .color(palette::faded(palette::WHITE, 0.9)),
        button(text("EXPLORE COLLECTION").size(type_scale::SMALL))
            .style(theme::outline_button)
            .padding([spacing::MD, spacing::XXL])
            .on_press(Message::Navigate(Route::Gallery)),
    ]
    .spacing(spacing::LG)
    .align_x(Alignment::Center);

    stack![
        backdrop,
        scrim,
        container(lockup).center(Length::Fill),
        // Scroll cue at the bottom edge.
        container(
            container(Space::new(Length::Fixed(1.0), Length::Fixed(64.0)))
                .style(theme::divider)
        )
        .width(Length::Fill)
        .height(height)
        .align_x(Alignment::Center)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding([spacing::XXL, 0.0]),
    ]
    .into()
}

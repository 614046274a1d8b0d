//! Home lookbook grid: the eight signature looks, each tile revealing on
//! first viewport entry and opening the lightbox on click.

use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use crate::content::{Look, LOOKS};
use crate::layout::{
    lookbook_columns, PageMetrics, LOOKBOOK_CTA_HEIGHT, LOOKBOOK_HEADER_HEIGHT,
    LOOKBOOK_PADDING, LOOK_ROW_GAP, LOOK_TILE_HEIGHT,
};
use crate::route::Route;
use crate::state::reveal::{RevealKey, RevealTracker};
use crate::Message;

const LOOK_IMAGE_HEIGHT: f32 = 480.0;

pub fn view(metrics: PageMetrics, reveals: &RevealTracker) -> Element<'static, Message> {
    // Header and CTA fill the exact heights the page metrics assign them,
    // so the grid lands where the reveal geometry expects it.
    let header = container(
        column![
            text("THE COLLECTION")
                .size(type_scale::HEADING)
                .color(palette::GOLD),
            super::divider(96.0),
        ]
        .spacing(spacing::MD)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(LOOKBOOK_HEADER_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    let columns = lookbook_columns(metrics.width);
    let mut grid = column![].spacing(LOOK_ROW_GAP);
    for (row_index, chunk) in LOOKS.chunks(columns).enumerate() {
        let mut cells = row![].spacing(spacing::XL);
        for (cell, look) in chunk.iter().enumerate() {
            let index = row_index * columns + cell;
            cells = cells.push(tile(
                *look,
                reveals.is_shown(RevealKey::Look(index)),
            ));
        }
        // Pad the last row so tiles keep a uniform width.
        for _ in chunk.len()..columns {
            cells = cells.push(Space::new(Length::FillPortion(1), Length::Fixed(0.0)));
        }
        grid = grid.push(cells);
    }

    let cta = container(
        button(text("VIEW FULL LOOKBOOK").size(type_scale::SMALL))
            .style(theme::outline_button)
            .padding([spacing::MD, spacing::XXL])
            .on_press(Message::Navigate(Route::Gallery)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(LOOKBOOK_CTA_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    container(column![header, grid, cta])
        .width(Length::Fill)
        .padding([LOOKBOOK_PADDING, spacing::XL])
        .into()
}

fn tile(look: Look, shown: bool) -> Element<'static, Message> {
    if !shown {
        return Space::new(Length::FillPortion(1), Length::Fixed(LOOK_TILE_HEIGHT)).into();
    }

    let artwork = image(look.image.path())
        .width(Length::Fill)
        .height(Length::Fixed(LOOK_IMAGE_HEIGHT))
        .content_fit(ContentFit::Cover);

    let caption = column![
        text(look.title)
            .size(type_scale::LEAD)
            .color(palette::GOLD),
        text(look.description)
            .size(type_scale::CAPTION)
            .color(palette::faded(palette::CREAM, 0.6)),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    mouse_area(
        container(
            column![artwork, caption]
                .spacing(spacing::MD)
                .align_x(Alignment::Center),
        )
        .width(Length::FillPortion(1))
        .height(Length::Fixed(LOOK_TILE_HEIGHT)),
    )
    .interaction(iced::mouse::Interaction::Pointer)
    .on_press(Message::ImageSelected(look.image))
    .into()
}

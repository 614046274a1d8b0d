//! The archive: every campaign image flowing through a masonry wall.
//!
//! Column count follows the window width; items reveal individually as the
//! wall scrolls into view and open the lightbox on click.

use iced::widget::{column, container, image, mouse_area, row, stack, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use super::footer;

use crate::content::{ArchiveItem, ARCHIVE};
use crate::layout::{
    PageMetrics, Placement, ARCHIVE_BOTTOM_PADDING, ARCHIVE_GAP, ARCHIVE_HEADER_HEIGHT,
};
use crate::state::reveal::{RevealKey, RevealTracker};
use crate::Message;

pub fn view(metrics: PageMetrics, reveals: &RevealTracker) -> Element<'static, Message> {
    let header = container(
        column![
            text("THE ARCHIVE")
                .size(type_scale::DISPLAY)
                .color(palette::GOLD),
            text("CURATED MOMENTS OF EXCELLENCE")
                .size(type_scale::CAPTION)
                .color(palette::faded(palette::WHITE, 0.6)),
        ]
        .spacing(spacing::MD)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(ARCHIVE_HEADER_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    let column_width = metrics.archive_column_width();
    let mut wall = row![].spacing(ARCHIVE_GAP);
    for placements in metrics.archive_wall() {
        let mut lane = column![].spacing(ARCHIVE_GAP).width(Length::Fixed(column_width));
        for placement in placements {
            lane = lane.push(placed_tile(
                placement,
                column_width,
                reveals.is_shown(RevealKey::ArchiveItem(placement.index)),
            ));
        }
        wall = wall.push(lane);
    }

    column![
        header,
        container(wall).width(Length::Fill).align_x(Alignment::Center),
        Space::new(Length::Fill, Length::Fixed(ARCHIVE_BOTTOM_PADDING)),
        footer::view(),
    ]
    .into()
}

/// One wall tile at its computed height, preceded by its ornamental offset.
fn placed_tile(placement: Placement, width: f32, shown: bool) -> Element<'static, Message> {
    let item = ARCHIVE[placement.index];

    let body: Element<'static, Message> = if shown {
        tile(item, width, placement.height)
    } else {
        Space::new(Length::Fixed(width), Length::Fixed(placement.height)).into()
    };

    column![
        Space::new(Length::Fixed(width), Length::Fixed(placement.offset)),
        body,
    ]
    .into()
}

fn tile(item: ArchiveItem, width: f32, height: f32) -> Element<'static, Message> {
    let artwork = image(item.image.path())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Cover);

    let label = container(
        text(format!("REF. {:03}", item.reference))
            .size(type_scale::CAPTION)
            .color(palette::MIDNIGHT),
    )
    .style(theme::reference_tag)
    .padding([2.0, spacing::XS]);

    let overlay = container(label)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(spacing::MD);

    mouse_area(stack![artwork, overlay])
        .interaction(iced::mouse::Interaction::Pointer)
        .on_press(Message::ImageSelected(item.image))
        .into()
}

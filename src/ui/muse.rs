//! Muse collection: editorial copy on the left, a wrapped 2x2 image grid on
//! the right.

use iced::widget::{column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::theme::{palette, spacing, type_scale};
use crate::content::MUSE_IMAGES;
use crate::Message;

const MUSE_TILE_WIDTH: f32 = 280.0;
const MUSE_TILE_HEIGHT: f32 = 320.0;

const NARRATIVE: [&str; 3] = [
    "Discover our signature collection where artistry meets innovation. Each \
     piece in the Muse Collection tells a story of timeless elegance, \
     contemporary flair, and unparalleled craftsmanship.",
    "From opulent evening gowns that command attention to delicate bridal \
     couture that captures eternal romance, our collection is a testament to \
     the boundless possibilities of bespoke fashion.",
    "We invite you to explore these masterpieces and envision how SENABEL can \
     bring your sartorial dreams to life with pieces that reflect your unique \
     elegance.",
];

pub fn view() -> Element<'static, Message> {
    let mut paragraphs = column![].spacing(spacing::MD);
    for paragraph in NARRATIVE {
        paragraphs = paragraphs.push(
            text(paragraph)
                .size(type_scale::BODY)
                .color(palette::CREAM),
        );
    }

    let copy = column![
        text("THE MUSE COLLECTION")
            .size(type_scale::HEADING)
            .color(palette::GOLD),
        paragraphs,
        row![
            super::divider(48.0),
            text("CRAFTED WITH PASSION")
                .size(type_scale::CAPTION)
                .color(palette::GOLD),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center),
    ]
    .spacing(spacing::XL)
    .max_width(560.0);

    let mut tiles = Vec::new();
    for muse in MUSE_IMAGES {
        tiles.push(
            column![
                image(muse.image.path())
                    .width(Length::Fixed(MUSE_TILE_WIDTH))
                    .height(Length::Fixed(MUSE_TILE_HEIGHT))
                    .content_fit(ContentFit::Cover),
                text(muse.caption)
                    .size(type_scale::CAPTION)
                    .color(palette::faded(palette::CREAM, 0.6)),
            ]
            .spacing(spacing::XS)
            .into(),
        );
    }
    let grid = Wrap::with_elements(tiles)
        .spacing(spacing::MD)
        .line_spacing(spacing::MD);

    container(
        row![
            container(copy)
                .width(Length::FillPortion(1))
                .align_y(Alignment::Center)
                .height(Length::Fill),
            container(grid)
                .width(Length::FillPortion(1))
                .align_y(Alignment::Center)
                .height(Length::Fill),
        ]
        .spacing(spacing::XXL),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([spacing::XXL, spacing::XL])
    .into()
}

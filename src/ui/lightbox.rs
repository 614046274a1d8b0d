//! Enlarged image overlay.
//!
//! Rendered on top of the page when an image is selected. The backdrop and
//! the close control both dismiss; the framed image swallows its own clicks
//! so they never fall through to the backdrop.

use iced::widget::{button, column, container, image, mouse_area, opaque, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::theme::{self, palette, type_scale};
use crate::content::ImageRef;
use crate::layout::PageMetrics;
use crate::Message;

pub fn view(selected: ImageRef, metrics: PageMetrics) -> Element<'static, Message> {
    let enlarged = image(selected.path())
        .width(Length::Fixed(metrics.width * 0.9))
        .height(Length::Fixed(metrics.height * 0.8))
        .content_fit(ContentFit::Contain);

    let close = button(
        text("CLOSE")
            .size(type_scale::CAPTION)
            .color(palette::faded(palette::WHITE, 0.5)),
    )
    .style(theme::link_button)
    .on_press(Message::LightboxDismissed);

    let framed = column![
        close,
        container(enlarged).style(theme::lightbox_frame),
    ]
    .spacing(8.0)
    .align_x(Alignment::End);

    // The inner opaque layer keeps clicks on the image from reaching the
    // backdrop's dismiss handler.
    opaque(
        mouse_area(
            container(opaque(framed))
                .center(Length::Fill)
                .style(theme::backdrop),
        )
        .on_press(Message::LightboxDismissed),
    )
}

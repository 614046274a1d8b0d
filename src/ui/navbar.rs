//! Fixed navigation bar.
//!
//! Overlays the top of either page; transparent over the hero, opaque
//! charcoal once scrolled past the threshold. Narrow windows collapse the
//! links into a toggled menu sheet.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use crate::content::BRAND;
use crate::layout::NAV_HEIGHT;
use crate::route::{Anchor, Route};
use crate::state::nav::NavBarState;
use crate::Message;

/// Below this window width the bar collapses into the menu toggle.
const COLLAPSE_WIDTH: f32 = 768.0;

pub fn view(nav: NavBarState, window_width: f32) -> Element<'static, Message> {
    let brand = button(
        text(BRAND)
            .size(type_scale::TITLE)
            .color(palette::GOLD),
    )
    .style(theme::link_button)
    .on_press(Message::Navigate(Route::Home));

    let bar: Element<'static, Message> = if window_width < COLLAPSE_WIDTH {
        let toggle = button(
            text(if nav.is_menu_open { "CLOSE" } else { "MENU" })
                .size(type_scale::SMALL)
                .color(palette::GOLD),
        )
        .style(theme::link_button)
        .on_press(Message::MenuToggled);

        row![brand, horizontal_space(), toggle]
            .align_y(Alignment::Center)
            .into()
    } else {
        row![
            brand,
            horizontal_space(),
            link("HOME", Message::Navigate(Route::Home)),
            link("GALLERY", Message::Navigate(Route::Gallery)),
            horizontal_space(),
            button(text("CONTACT US").size(type_scale::SMALL))
                .style(theme::outline_button)
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::AnchorRequested(Anchor::Contact)),
        ]
        .spacing(spacing::XL)
        .align_y(Alignment::Center)
        .into()
    };

    let bar = container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_HEIGHT))
        .padding([0.0, spacing::XL])
        .align_y(Alignment::Center)
        .style(theme::navbar(nav.is_scrolled));

    if nav.is_menu_open && window_width < COLLAPSE_WIDTH {
        column![bar, menu_sheet()].into()
    } else {
        bar.into()
    }
}

fn link(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(type_scale::SMALL))
        .style(theme::link_button)
        .on_press(message)
        .into()
}

/// The collapsible menu. Every entry routes through an anchor request,
/// which also closes the sheet.
fn menu_sheet() -> Element<'static, Message> {
    let entry = |label: &'static str, anchor: Anchor| {
        button(text(label).size(type_scale::SMALL).color(palette::CREAM))
            .style(theme::link_button)
            .on_press(Message::AnchorRequested(anchor))
    };

    container(
        column![
            entry("HOME", Anchor::Hero),
            entry("BESPOKE PROCESS", Anchor::Bespoke),
            entry("COLLECTION", Anchor::Collection),
            button(text("CONTACT US").size(type_scale::SMALL))
                .style(theme::outline_button)
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::AnchorRequested(Anchor::Contact)),
        ]
        .spacing(spacing::MD),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(theme::menu_sheet)
    .into()
}

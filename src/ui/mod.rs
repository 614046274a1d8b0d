//! View composition.
//!
//! Sections are plain functions from state to widgets; the composers below
//! assemble them into the two full pages. Entrance reveals are applied here
//! so every section gets them the same way.

pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod lightbox;
pub mod lookbook;
pub mod muse;
pub mod navbar;
pub mod process;
pub mod theme;

use iced::widget::{column, container, Space};
use iced::{Element, Length};

use crate::layout::{PageMetrics, Section};
use crate::state::reveal::RevealKey;
use crate::{Message, Senabel};

/// The home page: hero, bespoke process, lookbook, muse collection, contact
/// form, footer.
pub fn home(app: &Senabel) -> Element<'_, Message> {
    let metrics = app.metrics();
    column![
        section(app, metrics, Section::Hero, hero::view(metrics)),
        section(app, metrics, Section::Bespoke, process::view()),
        section(
            app,
            metrics,
            Section::Lookbook,
            lookbook::view(metrics, &app.reveals)
        ),
        section(app, metrics, Section::Muse, muse::view()),
        section(app, metrics, Section::Contact, contact::view(&app.form)),
        footer::view(),
    ]
    .into()
}

/// The gallery archive page.
pub fn archive(app: &Senabel) -> Element<'_, Message> {
    gallery::view(app.metrics(), &app.reveals)
}

/// Swap a section's content in once its reveal latch is set, holding the
/// section's designed height either way so the page never reflows.
fn section<'a>(
    app: &Senabel,
    metrics: PageMetrics,
    section: Section,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let height = metrics.section_height(section);
    let body: Element<'a, Message> = if app.reveals.is_shown(RevealKey::Section(section)) {
        content
    } else {
        Space::new(Length::Fill, Length::Fixed(height)).into()
    };

    let style: fn(&iced::Theme) -> iced::widget::container::Style = match section {
        Section::Bespoke | Section::Muse => theme::section_charcoal,
        _ => theme::section_midnight,
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(style)
        .into()
}

/// A thin gold divider line.
pub fn divider(width: f32) -> Element<'static, Message> {
    container(Space::new(Length::Fixed(width), Length::Fixed(2.0)))
        .style(theme::divider)
        .into()
}

//! Lead-capture form.
//!
//! All five inputs are controlled; the submit control is live only when the
//! required fields are filled and no submission is in flight. Success shows
//! a confirmation line that the app reverts after five seconds.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::theme::{self, palette, spacing, type_scale};
use crate::content::CONTACT_EMAIL;
use crate::state::form::{ContactFormState, LeadField, SubmitStatus};
use crate::Message;

pub fn view(form: &ContactFormState) -> Element<'_, Message> {
    let heading = column![
        text("BEGIN YOUR JOURNEY")
            .size(type_scale::HEADING)
            .color(palette::GOLD),
        text("Share your vision with us, and let's create something extraordinary together.")
            .size(type_scale::LEAD)
            .color(palette::CREAM),
    ]
    .spacing(spacing::MD)
    .align_x(Alignment::Center);

    let fields = column![
        row![
            field("FULL NAME *", "Enter your full name", form, LeadField::FullName),
            field("EMAIL ADDRESS *", "your@email.com", form, LeadField::Email),
        ]
        .spacing(spacing::LG),
        row![
            field("CITY *", "Your city", form, LeadField::City),
            field("CONTACT NUMBER *", "+1 (555) 000-0000", form, LeadField::Phone),
        ]
        .spacing(spacing::LG),
        field(
            "YOUR VISION (OPTIONAL)",
            "Tell us about your dream piece...",
            form,
            LeadField::Message,
        ),
    ]
    .spacing(spacing::LG);

    let submit_label = if form.status == SubmitStatus::Submitting {
        "SENDING..."
    } else {
        "SUBMIT"
    };
    let submit = button(text(submit_label).size(type_scale::LEAD))
        .style(theme::gold_button)
        .padding([spacing::MD, spacing::XXL * 2.0])
        .on_press_maybe(form.can_submit().then_some(Message::SubmitPressed));

    let mut body = column![heading, fields, submit]
        .spacing(spacing::XL)
        .align_x(Alignment::Center)
        .max_width(900.0);

    if form.status == SubmitStatus::Success {
        body = body.push(
            text("Thank you! We'll be in touch soon to begin your bespoke journey.")
                .size(type_scale::SMALL)
                .color(palette::GOLD),
        );
    }

    body = body.push(
        text(format!("Prefer to speak directly? Reach us at {CONTACT_EMAIL}"))
            .size(type_scale::SMALL)
            .color(palette::faded(palette::CREAM, 0.6)),
    );

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    form: &'a ContactFormState,
    field: LeadField,
) -> Element<'a, Message> {
    column![
        text(label)
            .size(type_scale::CAPTION)
            .color(palette::CREAM),
        text_input(placeholder, form.draft.field(field))
            .on_input(move |value| Message::DraftChanged(field, value))
            .style(theme::lead_input)
            .padding(spacing::SM)
            .size(type_scale::BODY),
    ]
    .spacing(spacing::XS)
    .width(Length::FillPortion(1))
    .into()
}

//! Brand design tokens and shared widget styles.
//!
//! Tokens are centralized so every section draws from the same palette and
//! scale; the values come from the brand sheet (midnight black, deep
//! charcoal, burnished gold, warm cream).

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const MIDNIGHT: Color = Color::from_rgb(0.039, 0.039, 0.039);
    pub const CHARCOAL: Color = Color::from_rgb(0.071, 0.071, 0.071);
    pub const GOLD: Color = Color::from_rgb(0.831, 0.686, 0.216);
    pub const CREAM: Color = Color::from_rgb(0.961, 0.961, 0.863);
    pub const WHITE: Color = Color::WHITE;

    /// A palette color at reduced opacity.
    pub fn faded(color: Color, alpha: f32) -> Color {
        Color { a: alpha, ..color }
    }
}

// ============================================================================
// Spacing scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Type scale
// ============================================================================

pub mod type_scale {
    pub const CAPTION: f32 = 12.0;
    pub const SMALL: f32 = 14.0;
    pub const BODY: f32 = 16.0;
    pub const LEAD: f32 = 18.0;
    pub const TITLE: f32 = 26.0;
    pub const HEADING: f32 = 42.0;
    pub const DISPLAY: f32 = 72.0;
}

/// The application theme.
pub fn senabel() -> Theme {
    Theme::custom(
        "Senabel".to_string(),
        iced::theme::Palette {
            background: palette::MIDNIGHT,
            text: palette::CREAM,
            primary: palette::GOLD,
            success: palette::GOLD,
            danger: Color::from_rgb(0.898, 0.224, 0.208),
        },
    )
}

// ============================================================================
// Shared widget styles
// ============================================================================

/// Navigation bar background: transparent at rest, near-opaque charcoal once
/// the page has scrolled past the threshold.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| {
        let background = if scrolled {
            Some(Background::Color(palette::faded(palette::CHARCOAL, 0.95)))
        } else {
            None
        };
        container::Style {
            background,
            ..container::Style::default()
        }
    }
}

/// The expanded collapsible menu under the bar.
pub fn menu_sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::faded(palette::CHARCOAL, 0.98))),
        ..container::Style::default()
    }
}

pub fn section_midnight(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::MIDNIGHT)),
        ..container::Style::default()
    }
}

pub fn section_charcoal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CHARCOAL)),
        ..container::Style::default()
    }
}

/// Dark scrim over the hero image, for copy contrast.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::faded(Color::BLACK, 0.4))),
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::faded(Color::BLACK, 0.95))),
        ..container::Style::default()
    }
}

/// Thin gold frame around the enlarged lightbox image.
pub fn lightbox_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::faded(palette::GOLD, 0.2),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Gold reference tag on archive tiles.
pub fn reference_tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD)),
        text_color: Some(palette::MIDNIGHT),
        ..container::Style::default()
    }
}

/// A thin gold divider line.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::faded(palette::GOLD, 0.5))),
        ..container::Style::default()
    }
}

/// Filled gold call-to-action button.
pub fn gold_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::CREAM,
        button::Status::Disabled => palette::faded(palette::GOLD, 0.5),
        button::Status::Active => palette::GOLD,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::MIDNIGHT,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Gold-outlined button on dark ground.
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(
        status,
        button::Status::Hovered | button::Status::Pressed
    );
    button::Style {
        background: hovered.then(|| Background::Color(palette::GOLD)),
        text_color: if hovered {
            palette::MIDNIGHT
        } else {
            palette::GOLD
        },
        border: Border {
            color: palette::GOLD,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Bare text button used for navigation links.
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD,
        _ => palette::faded(palette::WHITE, 0.9),
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Transparent input with a thin gold border that brightens on focus.
pub fn lead_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused | text_input::Status::Hovered => palette::GOLD,
        _ => palette::faded(palette::GOLD, 0.5),
    };
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 0.0.into(),
        },
        icon: palette::CREAM,
        placeholder: palette::faded(palette::CREAM, 0.4),
        value: palette::CREAM,
        selection: palette::faded(palette::GOLD, 0.4),
    }
}

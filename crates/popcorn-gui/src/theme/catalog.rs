//! Style functions parameterized by ColorScheme.
//!
//! Each function returns a closure suitable for Iced's `.style()` method,
//! capturing the needed color tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::style;

use super::ColorScheme;

/// One of the two main boxes: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Top navigation bar, filled with the accent color.
pub fn nav_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.primary;
    let text = cs.on_primary;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_LG.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Summary panel above the watched list.
pub fn summary_panel(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_LG.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Rating panel on the detail view.
pub fn rating_panel(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Result row button with selection highlight.
pub fn list_item(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container_high = cs.surface_container_high;
    let surface_bright = cs.surface_bright;
    let primary = cs.primary;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (bg, border_color) = if selected {
            (Some(Background::Color(surface_container_high)), primary)
        } else {
            match status {
                button::Status::Hovered => (
                    Some(Background::Color(surface_bright)),
                    Color::TRANSPARENT,
                ),
                _ => (None, Color::TRANSPARENT),
            }
        };

        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                color: border_color,
                width: if selected { 1.0 } else { 0.0 },
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Primary action button (Add to list).
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => primary_hover,
            button::Status::Pressed => primary_dim,
            _ => primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary,
            border: Border {
                radius: style::RADIUS_FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Outlined button on a transparent background (Back).
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button with a subtle hover fill.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Round toggle in the corner of each box.
pub fn toggle_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let bg = cs.surface_container_lowest;
    let bg_hover = cs.surface_bright;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => bg_hover,
            _ => bg,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_surface,
            border: Border {
                radius: style::RADIUS_FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Borderless text input for use inside a composite search bar container.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: Color { a: 0.4, ..primary },
    }
}

/// Pill around the search icon, input and clear button.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.primary_dim;
    let border_color = cs.primary_hover;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Poster placeholder container.
pub fn poster_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Overlay scrollbar: thin transparent rail, pill scroller
/// that becomes more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}

//! Dark and light palettes plus the style functions built on them.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Popcorn",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.star,
            danger: cs.error,
        },
    )
}

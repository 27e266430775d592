//! Semantic color tokens for the application.

use iced::Color;

pub use popcorn_core::config::ThemeMode;

/// All semantic color tokens for the application.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces, low -> high elevation
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Accent
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,

    pub star: Color,
    pub success: Color,
    pub error: Color,
}

impl ColorScheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            // System is resolved before we get here; dark is the fallback.
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0x15, 0x17, 0x1A),
            surface: Color::from_rgb8(0x21, 0x25, 0x29),
            surface_container: Color::from_rgb8(0x34, 0x3A, 0x40),
            surface_container_high: Color::from_rgb8(0x3D, 0x44, 0x4B),
            surface_bright: Color::from_rgb8(0x49, 0x50, 0x57),

            on_surface: Color::from_rgb8(0xDE, 0xE2, 0xE6),
            on_surface_variant: Color::from_rgb8(0xAD, 0xB5, 0xBD),
            outline: Color::from_rgb8(0x86, 0x8E, 0x96),
            outline_variant: Color::from_rgb8(0x49, 0x50, 0x57),

            primary: Color::from_rgb8(0x69, 0x41, 0xC6),
            primary_hover: Color::from_rgb8(0x7C, 0x58, 0xD0),
            primary_dim: Color::from_rgb8(0x54, 0x34, 0x9E),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            star: Color::from_rgb8(0xFC, 0xC4, 0x19),
            success: Color::from_rgb8(0x51, 0xCF, 0x66),
            error: Color::from_rgb8(0xFA, 0x52, 0x52),
        }
    }

    pub fn light() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface: Color::from_rgb8(0xF8, 0xF9, 0xFA),
            surface_container: Color::from_rgb8(0xE9, 0xEC, 0xEF),
            surface_container_high: Color::from_rgb8(0xDE, 0xE2, 0xE6),
            surface_bright: Color::from_rgb8(0xCE, 0xD4, 0xDA),

            on_surface: Color::from_rgb8(0x21, 0x25, 0x29),
            on_surface_variant: Color::from_rgb8(0x49, 0x50, 0x57),
            outline: Color::from_rgb8(0x86, 0x8E, 0x96),
            outline_variant: Color::from_rgb8(0xCE, 0xD4, 0xDA),

            primary: Color::from_rgb8(0x6F, 0x42, 0xC1),
            primary_hover: Color::from_rgb8(0x5A, 0x32, 0xA3),
            primary_dim: Color::from_rgb8(0x4A, 0x28, 0x88),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            star: Color::from_rgb8(0xE0, 0xA8, 0x00),
            success: Color::from_rgb8(0x2F, 0x9E, 0x44),
            error: Color::from_rgb8(0xE0, 0x31, 0x31),
        }
    }
}

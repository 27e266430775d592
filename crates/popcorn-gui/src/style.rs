//! Design tokens: spacing, typography, and layout constants.
//!
//! All spacing is based on a 4px grid.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
pub const SPACE_3XL: f32 = 48.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 22.0;
pub const TEXT_3XL: f32 = 36.0;

// Line heights (multipliers for `LineHeight::Relative`)
pub const LINE_HEIGHT_TIGHT: f32 = 1.2;
pub const LINE_HEIGHT_NORMAL: f32 = 1.45;
pub const LINE_HEIGHT_LOOSE: f32 = 1.6;

pub const FONT_HEADING: iced::Font = iced::Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Semibold,
    stretch: iced::font::Stretch::Normal,
    style: iced::font::Style::Normal,
};

pub const FONT_ITALIC: iced::Font = iced::Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Normal,
    stretch: iced::font::Stretch::Normal,
    style: iced::font::Style::Italic,
};

// ── Layout ───────────────────────────────────────────────────────

pub const NAV_BAR_HEIGHT: f32 = 64.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const SEARCH_WIDTH: f32 = 420.0;
pub const THUMB_WIDTH: f32 = 40.0;
pub const THUMB_HEIGHT: f32 = 57.0;
pub const POSTER_WIDTH: f32 = 130.0;
pub const POSTER_HEIGHT: f32 = 185.0;
pub const TOGGLE_SIZE: f32 = 24.0;

// ── Rating ───────────────────────────────────────────────────────

pub const STAR_SIZE: f32 = 22.0;

// ── Radii ────────────────────────────────────────────────────────

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_FULL: f32 = 9999.0;
